//! Education entries: plain JSON CRUD.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, Auth};
use crate::models::Education;
use crate::store::ResourceState;

use super::apply;

const PATH: &str = "/api/v1/education";

#[derive(Debug)]
pub struct EducationStore {
    client: Arc<ApiClient>,
    state: ResourceState<Education>,
}

impl EducationStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: ResourceState::new(),
        }
    }

    pub fn state(&self) -> &ResourceState<Education> {
        &self.state
    }

    pub fn clear_messages(&mut self) {
        self.state.clear_messages();
    }

    /// Fetches all entries, replacing the cached list.
    pub async fn fetch(&mut self) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.get(PATH, &[], Auth::Optional).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_list(env.into_list(), message);
        })
    }

    pub async fn create(&mut self, draft: &Education) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.post_json(PATH, draft, Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_created(env.into_single(), message);
        })
    }

    pub async fn update(&mut self, id: &str, patch: &Education) -> Result<(), ApiError> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CredentialStore;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup(server: &MockServer) -> EducationStore {
        let credentials = Arc::new(CredentialStore::in_memory());
        credentials.store("tok123").unwrap();
        EducationStore::new(Arc::new(ApiClient::new(server.uri(), credentials)))
    }

    #[tokio::test]
    async fn test_fetch_replaces_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/education"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "error": false, "message": "ok",
                "results": [
                    {"_id": "e1", "name": "State University", "qualification": "BSc"},
                    {"_id": "e2", "name": "High School", "qualification": "Diploma"}
                ]
            })))
            .mount(&server)
            .await;

        let mut store = setup(&server).await;
        store.fetch().await.unwrap();

        assert_eq!(store.state().results().len(), 2);
        assert_eq!(store.state().results()[0].name, "State University");
    }

    #[tokio::test]
    async fn test_create_appends_and_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/education"))
            .and(header("Authorization", "Bearer tok123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "error": false, "message": "Education added",
                "result": {"_id": "e9", "name": "Night School", "qualification": "Cert"}
            })))
            .mount(&server)
            .await;

        let mut store = setup(&server).await;
        store
            .create(&Education::new("Night School", "Cert"))
            .await
            .unwrap();

        assert_eq!(store.state().results().len(), 1);
        assert_eq!(store.state().results()[0].id.as_deref(), Some("e9"));
        assert_eq!(store.state().message(), Some("Education added"));
    }

    #[tokio::test]
    async fn test_update_replaces_matching_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/education"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"_id": "e1", "name": "Old Name", "qualification": "BSc"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/v1/education/e1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {"_id": "e1", "name": "New Name", "qualification": "BSc"}
            })))
            .mount(&server)
            .await;

        let mut store = setup(&server).await;
        store.fetch().await.unwrap();
        store
            .update("e1", &Education::new("New Name", "BSc"))
            .await
            .unwrap();

        assert_eq!(store.state().results().len(), 1);
        assert_eq!(store.state().results()[0].name, "New Name");
    }

    #[tokio::test]
    async fn test_delete_uses_call_site_identity() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/education"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {"_id": "e1", "name": "A", "qualification": "X"},
                    {"_id": "e2", "name": "B", "qualification": "Y"}
                ]
            })))
            .mount(&server)
            .await;
        // The delete response does not echo the id.
        Mock::given(method("DELETE"))
            .and(path("/api/v1/education/e1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "error": false, "message": "Deleted"
            })))
            .mount(&server)
            .await;

        let mut store = setup(&server).await;
        store.fetch().await.unwrap();
        store.delete("e1").await.unwrap();

        assert_eq!(store.state().results().len(), 1);
        assert_eq!(store.state().results()[0].id.as_deref(), Some("e2"));
    }
}
