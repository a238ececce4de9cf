//! Testimonials: multipart create/update, public listing.

use std::sync::Arc;

use crate::api::client::multipart_form;
use crate::api::{ApiClient, ApiError, Auth, ImageUpload};
use crate::models::Testimonial;
use crate::store::ResourceState;

use super::apply;

const PATH: &str = "/api/v1/testimonials";

#[derive(Debug)]
pub struct TestimonialStore {
    client: Arc<ApiClient>,
    state: ResourceState<Testimonial>,
}

impl TestimonialStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: ResourceState::new(),
        }
    }

    pub fn state(&self) -> &ResourceState<Testimonial> {
        &self.state
    }

    pub fn clear_messages(&mut self) {
        self.state.clear_messages();
    }

    pub async fn fetch(&mut self) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.get(PATH, &[], Auth::Optional).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_list(env.into_list(), message);
        })
    }

    pub async fn create(
        &mut self,
        draft: &Testimonial,
        image: Option<ImageUpload>,
    ) -> Result<(), ApiError> {
        self.state.begin();
        let form = multipart_form(testimonial_fields(draft), image);
        let outcome = self.client.post_form(PATH, form, Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_created(env.into_single(), message);
        })
    }

    pub async fn update(
        &mut self,
        id: &str,
        patch: &Testimonial,
        image: Option<ImageUpload>,
    ) -> Result<(), ApiError> {
        self.state.begin();
        let path = format!("{}/{}", PATH, id);
        let form = multipart_form(testimonial_fields(patch), image);
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

fn testimonial_fields(testimonial: &Testimonial) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("name", testimonial.name.clone()),
        ("testimonial", testimonial.testimonial.clone()),
    ];
    if let Some(role) = &testimonial.role {
        fields.push(("role", role.clone()));
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

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/testimonials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {"_id": "t1", "name": "Sam", "testimonial": "Great."},
                    {"_id": "t2", "name": "Ada", "testimonial": "Solid."}
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/testimonials/t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Removed"})))
            .mount(&server)
            .await;

        let credentials = Arc::new(CredentialStore::in_memory());
        credentials.store("tok123").unwrap();
        let mut store = TestimonialStore::new(Arc::new(ApiClient::new(server.uri(), credentials)));

        store.fetch().await.unwrap();
        store.delete("t1").await.unwrap();

        assert_eq!(store.state().results().len(), 1);
        assert_eq!(store.state().results()[0].name, "Ada");
    }
}
