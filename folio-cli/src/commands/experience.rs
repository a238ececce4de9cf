use clap::{Args, Subcommand};
use std::sync::Arc;

use folio_core::{ApiClient, Experience, ExperienceStore};

#[derive(Args)]
pub struct ExperienceCommand {
    #[command(subcommand)]
    command: ExperienceSubcommand,
}

#[derive(Subcommand)]
enum ExperienceSubcommand {
    /// List all experience entries
    List,

    /// Add an experience entry
    Add {
        /// Company name
        company: String,

        /// Role or job title
        role: String,

        /// Display duration, e.g. "Jan 2023 - Present"
        #[arg(long)]
        duration: Option<String>,

        /// What the work involved
        #[arg(long)]
        description: Option<String>,
    },

    /// Update an experience entry
    Update {
        /// Entry ID
        id: String,

        /// Company name
        company: String,

        /// Role or job title
        role: String,

        #[arg(long)]
        duration: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an experience entry
    Delete {
        /// Entry ID
        id: String,
    },
}

fn build_entry(
    company: &str,
    role: &str,
    duration: &Option<String>,
    description: &Option<String>,
) -> Experience {
    let mut entry = Experience::new(company, role);
    if let Some(duration) = duration {
        entry = entry.with_duration(duration);
    }
    if let Some(description) = description {
        entry = entry.with_description(description);
    }
    entry
}

impl ExperienceCommand {
    pub async fn run(&self, client: &Arc<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = ExperienceStore::new(client.clone());
        match &self.command {
            ExperienceSubcommand::List => {
                store.fetch().await?;
                if store.state().results().is_empty() {
                    println!("No experience entries.");
                }
                for entry in store.state().results() {
                    println!("[{}] {}", entry.id.as_deref().unwrap_or("-"), entry);
                }
            }
            ExperienceSubcommand::Add {
                company,
                role,
                duration,
                description,
            } => {
                let draft = build_entry(company, role, duration, description);
                store.create(&draft).await?;
                println!("{}", store.state().message().unwrap_or("Experience added."));
            }
            ExperienceSubcommand::Update {
                id,
                company,
                role,
                duration,
                description,
            } => {
                let patch = build_entry(company, role, duration, description);
                store.update(id, &patch).await?;
                println!("{}", store.state().message().unwrap_or("Experience updated."));
            }
            ExperienceSubcommand::Delete { id } => {
                store.delete(id).await?;
                println!("{}", store.state().message().unwrap_or("Experience deleted."));
            }
        }
        Ok(())
    }
}
