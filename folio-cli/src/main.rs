use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

mod commands;
mod config;

use commands::{
    AboutCommand, AuthCommand, AwardCommand, ConfigCommand, ContactCommand, EducationCommand,
    ExperienceCommand, MessageCommand, ProjectCommand, TechStackCommand, TestimonialCommand,
};
use config::Config;
use folio_core::{ApiClient, CredentialStore};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Admin CLI for the Folio portfolio backend", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to and out of the backend
    Auth(AuthCommand),

    /// Manage the about section
    About(AboutCommand),

    /// Manage education entries
    Education(EducationCommand),

    /// Manage experience entries
    Experience(ExperienceCommand),

    /// Manage tech stack categories and skills
    Techstack(TechStackCommand),

    /// Manage projects
    Project(ProjectCommand),

    /// Manage awards and certifications
    Award(AwardCommand),

    /// Manage testimonials
    Testimonial(TestimonialCommand),

    /// Send and read contact-form messages
    Message(MessageCommand),

    /// Manage the contact card
    Contact(ContactCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;
    tracing::debug!(api_url = %config.api_url.value, "configuration loaded");

    if let Commands::Config(cmd) = &cli.command {
        return cmd.run(&config);
    }

    let credentials = Arc::new(CredentialStore::new(config.token_path.value.clone()));
    let client = Arc::new(ApiClient::new(config.api_url.value.clone(), credentials));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        match &cli.command {
            Commands::Auth(cmd) => cmd.run(&client).await,
            Commands::About(cmd) => cmd.run(&client).await,
            Commands::Education(cmd) => cmd.run(&client).await,
            Commands::Experience(cmd) => cmd.run(&client).await,
            Commands::Techstack(cmd) => cmd.run(&client).await,
            Commands::Project(cmd) => cmd.run(&client).await,
            Commands::Award(cmd) => cmd.run(&client).await,
            Commands::Testimonial(cmd) => cmd.run(&client).await,
            Commands::Message(cmd) => cmd.run(&client).await,
            Commands::Contact(cmd) => cmd.run(&client).await,
            Commands::Config(_) => unreachable!("handled above"),
        }
    })
}
