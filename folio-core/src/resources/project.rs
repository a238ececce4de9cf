//! Projects: filtered listing, independent single-entity projection,
//! multipart create/update, and derived technology tags.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::client::multipart_form;
use crate::api::{ApiClient, ApiError, Auth, ImageUpload};
use crate::models::Project;
use crate::store::ResourceState;

use super::apply;

const PATH: &str = "/api/v1/project";

/// Optional query filters for the list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub skill: Option<String>,
    pub category: Option<String>,
}

impl ProjectFilter {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(skill) = &self.skill {
            query.push(("skill", skill.clone()));
        }
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        query
    }
}

#[derive(Debug)]
pub struct ProjectStore {
    client: Arc<ApiClient>,
    state: ResourceState<Project>,
}

impl ProjectStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: ResourceState::new(),
        }
    }

    pub fn state(&self) -> &ResourceState<Project> {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn clear_messages(&mut self) {
        self.state.clear_messages();
    }

    /// Unique technology labels across the cached list, sorted. Derived on
    /// every call, never cached.
    pub fn unique_technologies(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .state
            .results()
            .iter()
            .flat_map(|p| p.technology_names())
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// How many cached projects use each technology.
    pub fn technology_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for project in self.state.results() {
            for name in project.technology_names() {
                *counts.entry(name.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Fetches the (optionally filtered) project list. Public endpoint.
    pub async fn fetch(&mut self, filter: &ProjectFilter) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.get(PATH, &filter.query(), Auth::None).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_list(env.into_list(), message);
        })
    }

    /// Fetches one project into the single projection; the cached list is
    /// left untouched.
    pub async fn fetch_by_id(&mut self, id: &str) -> Result<(), ApiError> {
        self.state.begin();
        let path = format!("{}/{}", PATH, id);
        let outcome = self.client.get(&path, &[], Auth::Optional).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_one(env.into_single(), message);
        })
    }

    pub async fn create(
        &mut self,
        draft: &Project,
        image: Option<ImageUpload>,
    ) -> Result<(), ApiError> {
        self.state.begin();
        let form = multipart_form(project_fields(draft), image);
        let outcome = self.client.post_form(PATH, form, Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_created(env.into_single(), message);
        })
    }

    pub async fn update(
        &mut self,
        id: &str,
        patch: &Project,
        image: Option<ImageUpload>,
    ) -> Result<(), ApiError> {
        self.state.begin();
        let path = format!("{}/{}", PATH, id);
        let form = multipart_form(project_fields(patch), image);
        let outcome = self.client.patch_form(&path, form, Auth::Required).await;
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

/// Text fields for the multipart body. `technologiesUsed` travels as a JSON
/// string inside the form, matching what the backend parses.
fn project_fields(project: &Project) -> Vec<(&'static str, String)> {
    let mut fields = vec![("projectName", project.project_name.clone())];
    if let Some(description) = &project.project_description {
        fields.push(("projectDescription", description.clone()));
    }
    fields.push((
        "technologiesUsed",
        serde_json::to_string(&project.technologies_used).unwrap_or_else(|_| "[]".to_string()),
    ));
    if let Some(link) = &project.preview_link {
        fields.push(("previewLink", link.clone()));
    }
    if let Some(link) = &project.github_link {
        fields.push(("githubLink", link.clone()));
    }
    if let Some(category) = &project.category {
        fields.push(("category", category.clone()));
    }
    fields
}
