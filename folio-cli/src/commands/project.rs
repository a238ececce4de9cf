use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use folio_core::{ApiClient, Project, ProjectFilter, ProjectStore, Technology};

use super::read_image;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ProjectCommand {
    #[command(subcommand)]
    command: ProjectSubcommand,
}

#[derive(Subcommand)]
enum ProjectSubcommand {
    /// List projects, optionally filtered
    List {
        /// Only projects using this skill
        #[arg(long)]
        skill: Option<String>,

        /// Only projects in this category
        #[arg(long)]
        category: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show one project
    Show {
        /// Project ID
        id: String,
    },

    /// List the technologies used across all projects
    Tags,

    /// Add a project
    Add {
        /// Project name
        name: String,

        /// What the project does
        #[arg(long)]
        description: Option<String>,

        /// Technology used (can be repeated)
        #[arg(long = "tech", value_name = "TECH")]
        technologies: Vec<String>,

        /// Live preview URL
        #[arg(long)]
        preview: Option<String>,

        /// Source repository URL
        #[arg(long)]
        github: Option<String>,

        /// Project category
        #[arg(long)]
        category: Option<String>,

        /// Screenshot to upload
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Update a project
    Update {
        /// Project ID
        id: String,

        /// Project name
        name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "tech", value_name = "TECH")]
        technologies: Vec<String>,

        #[arg(long)]
        preview: Option<String>,

        #[arg(long)]
        github: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Delete a project
    Delete {
        /// Project ID
        id: String,
    },
}

fn build_project(
    name: &str,
    description: &Option<String>,
    technologies: &[String],
    preview: &Option<String>,
    github: &Option<String>,
    category: &Option<String>,
) -> Project {
    let mut project = Project::new(name).with_technologies(
        technologies
            .iter()
            .map(|t| Technology::Name(t.clone()))
            .collect(),
    );
    if let Some(description) = description {
        project = project.with_description(description);
    }
    if let Some(preview) = preview {
        project = project.with_preview_link(preview);
    }
    if let Some(github) = github {
        project = project.with_github_link(github);
    }
    if let Some(category) = category {
        project = project.with_category(category);
    }
    project
}

impl ProjectCommand {
    pub async fn run(&self, client: &Arc<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = ProjectStore::new(client.clone());
        match &self.command {
            ProjectSubcommand::List {
                skill,
                category,
                format,
            } => {
                let filter = ProjectFilter {
                    skill: skill.clone(),
                    category: category.clone(),
                };
                store.fetch(&filter).await?;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(store.state().results())?);
                    }
                    OutputFormat::Text => {
                        if store.state().results().is_empty() {
                            println!("No projects.");
                        }
                        for project in store.state().results() {
                            println!("[{}] {}\n", project.id.as_deref().unwrap_or("-"), project);
                        }
                    }
                }
            }
            ProjectSubcommand::Show { id } => {
                store.fetch_by_id(id).await?;
                match store.state().result() {
                    Some(project) => println!("{}", project),
                    None => println!("Project not found: {}", id),
                }
            }
            ProjectSubcommand::Tags => {
                store.fetch(&ProjectFilter::default()).await?;
                for (name, count) in store.technology_counts() {
                    println!("{} ({})", name, count);
                }
            }
            ProjectSubcommand::Add {
                name,
                description,
                technologies,
                preview,
                github,
                category,
                image,
            } => {
                let draft = build_project(name, description, technologies, preview, github, category);
                let upload = image.as_deref().map(read_image).transpose()?;
                store.create(&draft, upload).await?;
                println!("{}", store.state().message().unwrap_or("Project added."));
            }
            ProjectSubcommand::Update {
                id,
                name,
                description,
                technologies,
                preview,
                github,
                category,
                image,
            } => {
                let patch = build_project(name, description, technologies, preview, github, category);
                let upload = image.as_deref().map(read_image).transpose()?;
                store.update(id, &patch, upload).await?;
                println!("{}", store.state().message().unwrap_or("Project updated."));
            }
            ProjectSubcommand::Delete { id } => {
                store.delete(id).await?;
                println!("{}", store.state().message().unwrap_or("Project deleted."));
            }
        }
        Ok(())
    }
}
