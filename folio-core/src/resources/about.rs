//! The "about me" singleton: fetch and save (multipart).

use std::sync::Arc;

use crate::api::client::multipart_form;
use crate::api::{ApiClient, ApiError, Auth, ImageUpload};
use crate::models::About;
use crate::store::ResourceState;

use super::apply;

const PATH: &str = "/api/v1/about";

#[derive(Debug)]
pub struct AboutStore {
    client: Arc<ApiClient>,
    state: ResourceState<About>,
}

impl AboutStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: ResourceState::new(),
        }
    }

    pub fn state(&self) -> &ResourceState<About> {
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

    /// Saves the section; the backend upserts, so create and update are the
    /// same call.
    pub async fn save(&mut self, draft: &About, image: Option<ImageUpload>) -> Result<(), ApiError> {
        self.state.begin();
        let mut fields = vec![("aboutText", draft.about_text.clone())];
        if let Some(stack) = &draft.tech_stack {
            fields.push(("techStack", stack.clone()));
        }
        let form = multipart_form(fields, image);
        let outcome = self.client.post_form(PATH, form, Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_one(env.into_single(), message);
        })
    }
}
