//! Contact-form messages: public send, admin-only listing.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, Auth};
use crate::models::Message;
use crate::store::ResourceState;

use super::apply;

const PATH: &str = "/api/v1/message";

#[derive(Debug)]
pub struct MessageStore {
    client: Arc<ApiClient>,
    state: ResourceState<Message>,
}

impl MessageStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: ResourceState::new(),
        }
    }

    pub fn state(&self) -> &ResourceState<Message> {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Submits a message through the public contact form. Works without a
    /// credential; visitors are not logged in.
    pub async fn send(&mut self, draft: &Message) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.post_json(PATH, draft, Auth::Optional).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_created(env.into_single(), message);
        })
    }

    /// Fetches the inbox. Admin only.
    pub async fn fetch(&mut self) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.get(PATH, &[], Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_list(env.into_list(), message);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CredentialStore;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_works_without_credential() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/message"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Message sent",
                "result": {"_id": "m1", "name": "Ana", "email": "ana@x.dev", "message": "Hi!"}
            })))
            .mount(&server)
            .await;

        let client = Arc::new(ApiClient::new(
            server.uri(),
            Arc::new(CredentialStore::in_memory()),
        ));
        let mut store = MessageStore::new(client);
        store
            .send(&Message::new("Ana", "ana@x.dev", "Hi!"))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("authorization"));
        assert_eq!(store.state().results().len(), 1);
        assert_eq!(store.state().message(), Some("Message sent"));
    }

    #[tokio::test]
    async fn test_fetch_requires_credential() {
        let server = MockServer::start().await;
        let client = Arc::new(ApiClient::new(
            server.uri(),
            Arc::new(CredentialStore::in_memory()),
        ));
        let mut store = MessageStore::new(client);

        let err = store.fetch().await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
