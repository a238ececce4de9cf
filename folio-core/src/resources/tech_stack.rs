//! Tech-stack categories: plain JSON CRUD plus derived highlights.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, Auth};
use crate::models::{Skill, TechStack};
use crate::store::ResourceState;

use super::apply;

const PATH: &str = "/api/v1/tech-stack";

#[derive(Debug)]
pub struct TechStackStore {
    client: Arc<ApiClient>,
    state: ResourceState<TechStack>,
}

impl TechStackStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: ResourceState::new(),
        }
    }

    pub fn state(&self) -> &ResourceState<TechStack> {
        &self.state
    }

    pub fn clear_messages(&mut self) {
        self.state.clear_messages();
    }

    /// Advanced skills across all categories, recomputed from the cached
    /// list on every call.
    pub fn highlights(&self) -> Vec<&Skill> {
        self.state
            .results()
            .iter()
            .flat_map(|stack| stack.advanced_skills())
            .collect()
    }

    pub async fn fetch(&mut self) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.get(PATH, &[], Auth::Optional).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_list(env.into_list(), message);
        })
    }

    pub async fn create(&mut self, draft: &TechStack) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.post_json(PATH, draft, Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_created(env.into_single(), message);
        })
    }

    pub async fn update(&mut self, id: &str, patch: &TechStack) -> Result<(), ApiError> {
        self.state.begin();
        let path = format!("{}/{}", PATH, id);
        let outcome = self.client.patch_json(&path, patch, Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_updated(env.into_single(), message);
        })
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.state.begin();
        let path = format!("{}/{}", PATH, id);
        let outcome = self.client.delete(&path, Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_deleted(id, message);
        })
    }
}
