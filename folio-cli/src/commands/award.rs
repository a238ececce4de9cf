use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use folio_core::{ApiClient, Award, AwardStore};

use super::read_image;

#[derive(Args)]
pub struct AwardCommand {
    #[command(subcommand)]
    command: AwardSubcommand,
}

#[derive(Subcommand)]
enum AwardSubcommand {
    /// List all awards and certifications
    List,

    /// Add an award
    Add {
        /// Award title
        title: String,

        /// What the award was for
        #[arg(long)]
        description: Option<String>,

        /// Date received, e.g. "2024-01-01"
        #[arg(long)]
        date: Option<String>,

        /// Certificate image to upload
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Update an award
    Update {
        /// Award ID
        id: String,

        /// Award title
        title: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Delete an award
    Delete {
        /// Award ID
        id: String,
    },
}

fn build_award(title: &str, description: &Option<String>, date: &Option<String>) -> Award {
    let mut award = Award::new(title);
    if let Some(description) = description {
        award = award.with_description(description);
    }
    if let Some(date) = date {
        award = award.with_date(date);
    }
    award
}

impl AwardCommand {
    pub async fn run(&self, client: &Arc<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = AwardStore::new(client.clone());
        match &self.command {
            AwardSubcommand::List => {
                store.fetch().await?;
                if store.state().results().is_empty() {
                    println!("No awards.");
                }
                for award in store.state().results() {
                    println!("[{}] {}", award.id.as_deref().unwrap_or("-"), award);
                }
            }
            AwardSubcommand::Add {
                title,
                description,
                date,
                image,
            } => {
                let upload = image.as_deref().map(read_image).transpose()?;
                store.create(&build_award(title, description, date), upload).await?;
                println!("{}", store.state().message().unwrap_or("Award added."));
            }
            AwardSubcommand::Update {
                id,
                title,
                description,
                date,
                image,
            } => {
                let upload = image.as_deref().map(read_image).transpose()?;
                store
                    .update(id, &build_award(title, description, date), upload)
                    .await?;
                println!("{}", store.state().message().unwrap_or("Award updated."));
            }
            AwardSubcommand::Delete { id } => {
                store.delete(id).await?;
                println!("{}", store.state().message().unwrap_or("Award deleted."));
            }
        }
        Ok(())
    }
}
