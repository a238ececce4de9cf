//! Authentication commands for the Folio CLI.
//!
//! Login exchanges email and password for a bearer token, which is persisted
//! by the credential store; logout removes it again.

use clap::{Args, Subcommand};
use std::io::{self, Write};
use std::sync::Arc;

use folio_core::{ApiClient, UserStore};

/// Authentication commands
#[derive(Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand)]
enum AuthSubcommand {
    /// Log in with email and password
    Login,
    /// Register the admin account
    Register,
    /// Log out (remove the stored token)
    Logout,
    /// Show authentication status
    Status,
}

impl AuthCommand {
    pub async fn run(&self, client: &Arc<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = UserStore::new(client.clone());
        match &self.command {
            AuthSubcommand::Login => login(&mut store).await,
            AuthSubcommand::Register => register(&mut store).await,
            AuthSubcommand::Logout => logout(&mut store),
            AuthSubcommand::Status => status(client, &mut store).await,
        }
    }
}

fn prompt(label: &str) -> Result<String, io::Error> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

async fn login(store: &mut UserStore) -> Result<(), Box<dyn std::error::Error>> {
    let email = prompt("Email")?;
    let password = prompt("Password")?;
    if email.is_empty() || password.is_empty() {
        return Err("Email and password cannot be empty".into());
    }

    store.login(&email, &password).await?;

    match store.state().result() {
        Some(user) => println!("Logged in as {}", user),
        None => println!("Logged in."),
    }
    Ok(())
}

async fn register(store: &mut UserStore) -> Result<(), Box<dyn std::error::Error>> {
    let name = prompt("Name")?;
    let email = prompt("Email")?;
    let password = prompt("Password")?;
    if email.is_empty() || password.is_empty() {
        return Err("Email and password cannot be empty".into());
    }

    store.register(&name, &email, &password).await?;
    println!(
        "{}",
        store
            .state()
            .message()
            .unwrap_or("Account created. Run 'folio auth login' to log in.")
    );
    Ok(())
}

fn logout(store: &mut UserStore) -> Result<(), Box<dyn std::error::Error>> {
    store.logout()?;
    println!("Logged out.");
    Ok(())
}

async fn status(
    client: &Arc<ApiClient>,
    store: &mut UserStore,
) -> Result<(), Box<dyn std::error::Error>> {
    match client.credentials().token() {
        Some(token) => {
            // Mask the token for display
            let masked = if token.len() > 8 {
                format!("{}...{}", &token[..4], &token[token.len() - 4..])
            } else {
                "****".to_string()
            };
            println!("Logged in (token: {})", masked);

            if store.current_user().await.is_ok() {
                if let Some(user) = store.state().result() {
                    println!("Account: {}", user);
                }
            }
        }
        None => {
            println!("Not logged in. Run 'folio auth login' to authenticate.");
        }
    }
    Ok(())
}
