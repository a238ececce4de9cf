use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use folio_core::{ApiClient, Testimonial, TestimonialStore};

use super::read_image;

#[derive(Args)]
pub struct TestimonialCommand {
    #[command(subcommand)]
    command: TestimonialSubcommand,
}

#[derive(Subcommand)]
enum TestimonialSubcommand {
    /// List all testimonials
    List,

    /// Add a testimonial
    Add {
        /// Who said it
        name: String,

        /// The quote itself
        quote: String,

        /// Their role, e.g. "CTO, Acme"
        #[arg(long)]
        role: Option<String>,

        /// Portrait to upload
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Update a testimonial
    Update {
        /// Testimonial ID
        id: String,

        /// Who said it
        name: String,

        /// The quote itself
        quote: String,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Delete a testimonial
    Delete {
        /// Testimonial ID
        id: String,
    },
}

fn build_testimonial(name: &str, quote: &str, role: &Option<String>) -> Testimonial {
    let mut testimonial = Testimonial::new(name, quote);
    if let Some(role) = role {
        testimonial = testimonial.with_role(role);
    }
    testimonial
}

impl TestimonialCommand {
    pub async fn run(&self, client: &Arc<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = TestimonialStore::new(client.clone());
        match &self.command {
            TestimonialSubcommand::List => {
                store.fetch().await?;
                if store.state().results().is_empty() {
                    println!("No testimonials.");
                }
                for testimonial in store.state().results() {
                    println!("[{}] {}\n", testimonial.id.as_deref().unwrap_or("-"), testimonial);
                }
            }
            TestimonialSubcommand::Add {
                name,
                quote,
                role,
                image,
            } => {
                let upload = image.as_deref().map(read_image).transpose()?;
                store
                    .create(&build_testimonial(name, quote, role), upload)
                    .await?;
                println!("{}", store.state().message().unwrap_or("Testimonial added."));
            }
            TestimonialSubcommand::Update {
                id,
                name,
                quote,
                role,
                image,
            } => {
                let upload = image.as_deref().map(read_image).transpose()?;
                store
                    .update(id, &build_testimonial(name, quote, role), upload)
                    .await?;
                println!("{}", store.state().message().unwrap_or("Testimonial updated."));
            }
            TestimonialSubcommand::Delete { id } => {
                store.delete(id).await?;
                println!("{}", store.state().message().unwrap_or("Testimonial deleted."));
            }
        }
        Ok(())
    }
}
