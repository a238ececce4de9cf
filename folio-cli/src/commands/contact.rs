use clap::{Args, Subcommand};
use std::sync::Arc;

use folio_core::{ApiClient, Contact, ContactStore};

#[derive(Args)]
pub struct ContactCommand {
    #[command(subcommand)]
    command: ContactSubcommand,
}

#[derive(Subcommand)]
enum ContactSubcommand {
    /// Show the contact card
    Show,

    /// Create the contact card
    Set {
        /// Contact email
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        github: Option<String>,

        #[arg(long)]
        linkedin: Option<String>,

        #[arg(long)]
        twitter: Option<String>,
    },

    /// Update the contact card
    Update {
        /// Card ID
        id: String,

        /// Contact email
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        github: Option<String>,

        #[arg(long)]
        linkedin: Option<String>,

        #[arg(long)]
        twitter: Option<String>,
    },

    /// Delete the contact card
    Delete {
        /// Card ID
        id: String,
    },
}

fn build_card(
    email: &str,
    phone: &Option<String>,
    location: &Option<String>,
    github: &Option<String>,
    linkedin: &Option<String>,
    twitter: &Option<String>,
) -> Contact {
    Contact {
        id: None,
        email: email.to_string(),
        phone: phone.clone(),
        location: location.clone(),
        github: github.clone(),
        linkedin: linkedin.clone(),
        twitter: twitter.clone(),
    }
}

impl ContactCommand {
    pub async fn run(&self, client: &Arc<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = ContactStore::new(client.clone());
        match &self.command {
            ContactSubcommand::Show => {
                store.fetch().await?;
                match store.state().result() {
                    Some(contact) => {
                        println!("[{}]", contact.id.as_deref().unwrap_or("-"));
                        print!("{}", contact);
                    }
                    None => println!("No contact card yet. Run 'folio contact set' to create one."),
                }
            }
            ContactSubcommand::Set {
                email,
                phone,
                location,
                github,
                linkedin,
                twitter,
            } => {
                let draft = build_card(email, phone, location, github, linkedin, twitter);
                store.create(&draft).await?;
                println!("{}", store.state().message().unwrap_or("Contact card saved."));
            }
            ContactSubcommand::Update {
                id,
                email,
                phone,
                location,
                github,
                linkedin,
                twitter,
            } => {
                let patch = build_card(email, phone, location, github, linkedin, twitter);
                store.update(id, &patch).await?;
                println!("{}", store.state().message().unwrap_or("Contact card updated."));
            }
            ContactSubcommand::Delete { id } => {
                store.delete(id).await?;
                println!("{}", store.state().message().unwrap_or("Contact card deleted."));
            }
        }
        Ok(())
    }
}
