//! HTTP gateway to the portfolio backend.

pub mod client;
pub mod credentials;
pub mod envelope;
pub mod error;

pub use client::{ApiClient, Auth, ImageUpload};
pub use credentials::CredentialStore;
pub use envelope::Envelope;
pub use error::ApiError;
