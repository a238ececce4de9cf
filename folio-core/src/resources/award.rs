//! Awards and certifications: multipart create/update, public listing.

use std::sync::Arc;

use crate::api::client::multipart_form;
use crate::api::{ApiClient, ApiError, Auth, ImageUpload};
use crate::models::Award;
use crate::store::ResourceState;

use super::apply;

const PATH: &str = "/api/v1/awards";

#[derive(Debug)]
pub struct AwardStore {
    client: Arc<ApiClient>,
    state: ResourceState<Award>,
}

impl AwardStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: ResourceState::new(),
        }
    }

    pub fn state(&self) -> &ResourceState<Award> {
        &self.state
    }

    pub fn clear_messages(&mut self) {
        self.state.clear_messages();
    }

    pub async fn fetch(&mut self) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.get(PATH, &[], Auth::None).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_list(env.into_list(), message);
        })
    }

    pub async fn create(
        &mut self,
        draft: &Award,
        image: Option<ImageUpload>,
    ) -> Result<(), ApiError> {
        self.state.begin();
        let form = multipart_form(award_fields(draft), image);
        let outcome = self.client.post_form(PATH, form, Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_created(env.into_single(), message);
        })
    }

    pub async fn update(
        &mut self,
        id: &str,
        patch: &Award,
        image: Option<ImageUpload>,
    ) -> Result<(), ApiError> {
        self.state.begin();
        let path = format!("{}/{}", PATH, id);
        let form = multipart_form(award_fields(patch), image);
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

fn award_fields(award: &Award) -> Vec<(&'static str, String)> {
    let mut fields = vec![("title", award.title.clone())];
    if let Some(description) = &award.description {
        fields.push(("description", description.clone()));
    }
    if let Some(date) = &award.date {
        fields.push(("date", date.clone()));
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CredentialStore;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup(server: &MockServer) -> AwardStore {
        let credentials = Arc::new(CredentialStore::in_memory());
        credentials.store("tok123").unwrap();
        AwardStore::new(Arc::new(ApiClient::new(server.uri(), credentials)))
    }

    #[tokio::test]
    async fn test_create_then_list_contains_new_entry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/awards"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "error": false, "message": "Award created",
                "result": {"_id": "a1", "title": "Hackathon Winner", "date": "2024-01-01"}
            })))
            .mount(&server)
            .await;

        let mut store = setup(&server).await;
        let draft = Award::new("Hackathon Winner").with_date("2024-01-01");
        store.create(&draft, None).await.unwrap();

        let entry = store
            .state()
            .results()
            .iter()
            .find(|a| a.id.as_deref() == Some("a1"))
            .expect("created award visible in list");
        assert_eq!(entry.title, "Hackathon Winner");
    }

    #[tokio::test]
    async fn test_duplicate_create_response_is_not_appended_twice() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/awards"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                // A racing refetch already delivered a1.
                "results": [{"_id": "a1", "title": "Hackathon Winner"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/awards"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {"_id": "a1", "title": "Hackathon Winner"}
            })))
            .mount(&server)
            .await;

        let mut store = setup(&server).await;
        store.fetch().await.unwrap();
        store.create(&Award::new("Hackathon Winner"), None).await.unwrap();

        assert_eq!(store.state().results().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_without_credential() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/awards"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        // Public display never needs a token.
        let store_client = Arc::new(ApiClient::new(
            server.uri(),
            Arc::new(CredentialStore::in_memory()),
        ));
        let mut store = AwardStore::new(store_client);
        store.fetch().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("authorization"));
    }
}
