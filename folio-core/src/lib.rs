//! Folio Core Library
//!
//! Models and resource synchronization stores for the Folio portfolio
//! backend. Each domain resource gets a store that mirrors server state
//! through the shared HTTP gateway.

pub mod api;
pub mod models;
pub mod resources;
pub mod store;

pub use api::{ApiClient, ApiError, Auth, CredentialStore, Envelope, ImageUpload};
pub use models::{
    About, Award, Contact, Education, Experience, Message, Project, Skill, TechStack, Technology,
    Testimonial, User,
};
pub use resources::{
    AboutStore, AwardStore, ContactStore, EducationStore, ExperienceStore, MessageStore,
    ProjectFilter, ProjectStore, TechStackStore, TestimonialStore, UserStore,
};
pub use store::{Entity, ResourceState, Status};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
