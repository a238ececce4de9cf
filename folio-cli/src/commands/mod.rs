mod about;
mod auth;
mod award;
mod config_cmd;
mod contact;
mod education;
mod experience;
mod message;
mod project;
mod techstack;
mod testimonial;

pub use about::AboutCommand;
pub use auth::AuthCommand;
pub use award::AwardCommand;
pub use config_cmd::ConfigCommand;
pub use contact::ContactCommand;
pub use education::EducationCommand;
pub use experience::ExperienceCommand;
pub use message::MessageCommand;
pub use project::ProjectCommand;
pub use techstack::TechStackCommand;
pub use testimonial::TestimonialCommand;

use folio_core::ImageUpload;
use std::path::Path;

/// Reads an image file into an upload part, keeping the original file name.
pub(crate) fn read_image(path: &Path) -> Result<ImageUpload, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Failed to read image '{}': {}", path.display(), e))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    Ok(ImageUpload::new(file_name, bytes))
}
