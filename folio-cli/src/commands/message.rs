use clap::{Args, Subcommand, ValueEnum};
use std::sync::Arc;

use folio_core::{ApiClient, Message, MessageStore};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct MessageCommand {
    #[command(subcommand)]
    command: MessageSubcommand,
}

#[derive(Subcommand)]
enum MessageSubcommand {
    /// Send a message through the contact form
    Send {
        /// Your name
        name: String,

        /// Your email address
        email: String,

        /// The message text
        message: String,
    },

    /// List received messages (admin only)
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl MessageCommand {
    pub async fn run(&self, client: &Arc<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = MessageStore::new(client.clone());
        match &self.command {
            MessageSubcommand::Send {
                name,
                email,
                message,
            } => {
                store.send(&Message::new(name, email, message)).await?;
                println!("{}", store.state().message().unwrap_or("Message sent."));
            }
            MessageSubcommand::List { format } => {
                store.fetch().await?;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(store.state().results())?);
                    }
                    OutputFormat::Text => {
                        if store.state().results().is_empty() {
                            println!("Inbox is empty.");
                        }
                        for message in store.state().results() {
                            println!("[{}] {}\n", message.id.as_deref().unwrap_or("-"), message);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
