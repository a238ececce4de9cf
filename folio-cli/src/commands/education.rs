use clap::{Args, Subcommand};
use std::sync::Arc;

use folio_core::{ApiClient, Education, EducationStore};

#[derive(Args)]
pub struct EducationCommand {
    #[command(subcommand)]
    command: EducationSubcommand,
}

#[derive(Subcommand)]
enum EducationSubcommand {
    /// List all education entries
    List,

    /// Add an education entry
    Add {
        /// Institution name
        name: String,

        /// Qualification (degree, diploma, ...)
        qualification: String,

        /// Institution address
        #[arg(long)]
        address: Option<String>,

        /// Grade or percentage achieved
        #[arg(long)]
        grade: Option<String>,

        /// Year (or range) of completion
        #[arg(long)]
        year: Option<String>,
    },

    /// Update an education entry
    Update {
        /// Entry ID
        id: String,

        /// Institution name
        name: String,

        /// Qualification (degree, diploma, ...)
        qualification: String,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        grade: Option<String>,

        #[arg(long)]
        year: Option<String>,
    },

    /// Delete an education entry
    Delete {
        /// Entry ID
        id: String,
    },
}

fn build_entry(
    name: &str,
    qualification: &str,
    address: &Option<String>,
    grade: &Option<String>,
    year: &Option<String>,
) -> Education {
    let mut entry = Education::new(name, qualification);
    if let Some(address) = address {
        entry = entry.with_address(address);
    }
    if let Some(grade) = grade {
        entry = entry.with_grade(grade);
    }
    if let Some(year) = year {
        entry = entry.with_year(year);
    }
    entry
}

impl EducationCommand {
    pub async fn run(&self, client: &Arc<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = EducationStore::new(client.clone());
        match &self.command {
            EducationSubcommand::List => {
                store.fetch().await?;
                if store.state().results().is_empty() {
                    println!("No education entries.");
                }
                for entry in store.state().results() {
                    println!("[{}] {}", entry.id.as_deref().unwrap_or("-"), entry);
                }
            }
            EducationSubcommand::Add {
                name,
                qualification,
                address,
                grade,
                year,
            } => {
                let draft = build_entry(name, qualification, address, grade, year);
                store.create(&draft).await?;
                println!("{}", store.state().message().unwrap_or("Education entry added."));
            }
            EducationSubcommand::Update {
                id,
                name,
                qualification,
                address,
                grade,
                year,
            } => {
                let patch = build_entry(name, qualification, address, grade, year);
                store.update(id, &patch).await?;
                println!("{}", store.state().message().unwrap_or("Education entry updated."));
            }
            EducationSubcommand::Delete { id } => {
                store.delete(id).await?;
                println!("{}", store.state().message().unwrap_or("Education entry deleted."));
            }
        }
        Ok(())
    }
}
