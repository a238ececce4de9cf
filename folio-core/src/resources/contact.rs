//! The contact-card singleton: JSON CRUD.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, Auth};
use crate::models::Contact;
use crate::store::ResourceState;

use super::apply;

const PATH: &str = "/api/v1/contact";

#[derive(Debug)]
pub struct ContactStore {
    client: Arc<ApiClient>,
    state: ResourceState<Contact>,
}

impl ContactStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: ResourceState::new(),
        }
    }

    pub fn state(&self) -> &ResourceState<Contact> {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub async fn fetch(&mut self) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.get(PATH, &[], Auth::Optional).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_one(env.into_single(), message);
        })
    }

    pub async fn create(&mut self, draft: &Contact) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.post_json(PATH, draft, Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_one(env.into_single(), message);
        })
    }

    pub async fn update(&mut self, id: &str, patch: &Contact) -> Result<(), ApiError> {
        self.state.begin();
        let path = format!("{}/{}", PATH, id);
        let outcome = self.client.patch_json(&path, patch, Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_one(env.into_single(), message);
        })
    }

    /// Deletes the card; the singleton projection is dropped regardless of
    /// what the delete response carries.
    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.state.begin();
        let path = format!("{}/{}", PATH, id);
        let outcome = self.client.delete(&path, Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_one(None, message);
        })
    }
}
