use clap::{Args, Subcommand};
use std::sync::Arc;

use folio_core::{ApiClient, Skill, TechStack, TechStackStore};

#[derive(Args)]
pub struct TechStackCommand {
    #[command(subcommand)]
    command: TechStackSubcommand,
}

#[derive(Subcommand)]
enum TechStackSubcommand {
    /// List all categories and their skills
    List {
        /// Only show advanced-level highlights
        #[arg(long)]
        highlights: bool,
    },

    /// Add a category
    Add {
        /// Category name, e.g. "Backend"
        category: String,

        /// Skill as "name" or "name:level" (can be repeated)
        #[arg(long = "skill", value_name = "SKILL")]
        skills: Vec<String>,
    },

    /// Replace a category's name and skills
    Update {
        /// Category ID
        id: String,

        /// Category name
        category: String,

        /// Skill as "name" or "name:level" (can be repeated)
        #[arg(long = "skill", value_name = "SKILL")]
        skills: Vec<String>,
    },

    /// Delete a category
    Delete {
        /// Category ID
        id: String,
    },
}

/// Parses a "name" or "name:level" skill argument.
fn parse_skill(raw: &str) -> Skill {
    match raw.split_once(':') {
        Some((name, level)) => Skill::new(name.trim(), level.trim()),
        None => Skill {
            name: raw.trim().to_string(),
            level: None,
        },
    }
}

fn build_stack(category: &str, skills: &[String]) -> TechStack {
    TechStack::new(category).with_skills(skills.iter().map(|s| parse_skill(s)).collect())
}

impl TechStackCommand {
    pub async fn run(&self, client: &Arc<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = TechStackStore::new(client.clone());
        match &self.command {
            TechStackSubcommand::List { highlights } => {
                store.fetch().await?;
                if *highlights {
                    for skill in store.highlights() {
                        println!("{}", skill.name);
                    }
                } else {
                    for stack in store.state().results() {
                        println!("[{}] {}", stack.id.as_deref().unwrap_or("-"), stack);
                    }
                }
            }
            TechStackSubcommand::Add { category, skills } => {
                store.create(&build_stack(category, skills)).await?;
                println!("{}", store.state().message().unwrap_or("Category added."));
            }
            TechStackSubcommand::Update {
                id,
                category,
                skills,
            } => {
                store.update(id, &build_stack(category, skills)).await?;
                println!("{}", store.state().message().unwrap_or("Category updated."));
            }
            TechStackSubcommand::Delete { id } => {
                store.delete(id).await?;
                println!("{}", store.state().message().unwrap_or("Category deleted."));
            }
        }
        Ok(())
    }
}
