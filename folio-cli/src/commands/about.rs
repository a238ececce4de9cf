use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use folio_core::{About, AboutStore, ApiClient};

use super::read_image;

#[derive(Args)]
pub struct AboutCommand {
    #[command(subcommand)]
    command: AboutSubcommand,
}

#[derive(Subcommand)]
enum AboutSubcommand {
    /// Show the about section
    Show,

    /// Save (create or replace) the about section
    Save {
        /// The bio text
        text: String,

        /// Free-text stack summary
        #[arg(long)]
        stack: Option<String>,

        /// Portrait to upload
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

impl AboutCommand {
    pub async fn run(&self, client: &Arc<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = AboutStore::new(client.clone());
        match &self.command {
            AboutSubcommand::Show => {
                store.fetch().await?;
                match store.state().result() {
                    Some(about) => println!("{}", about),
                    None => println!("No about section yet. Run 'folio about save' to create one."),
                }
            }
            AboutSubcommand::Save { text, stack, image } => {
                let mut draft = About::new(text);
                if let Some(stack) = stack {
                    draft = draft.with_tech_stack(stack);
                }
                let upload = image.as_deref().map(read_image).transpose()?;
                store.save(&draft, upload).await?;
                println!("{}", store.state().message().unwrap_or("About section saved."));
            }
        }
        Ok(())
    }
}
