//! The admin account: register, login, current-user, logout.
//!
//! This is the one store every other gateway depends on, indirectly: a
//! successful login writes the bearer token into the shared
//! [`CredentialStore`], and logout removes it again. Only these two
//! operations ever write the credential.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::api::{ApiClient, ApiError, Auth};
use crate::models::User;
use crate::store::ResourceState;

use super::apply;

const PATH: &str = "/api/v1/user";

#[derive(Debug)]
pub struct UserStore {
    client: Arc<ApiClient>,
    state: ResourceState<User>,
}

impl UserStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: ResourceState::new(),
        }
    }

    pub fn state(&self) -> &ResourceState<User> {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.credentials().is_authenticated()
    }

    /// Creates the admin account. Does not log in: the stored credential,
    /// if any, is left untouched.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.state.begin();
        let body = json!({ "name": name, "email": email, "password": password });
        let outcome = self
            .client
            .post_json(&format!("{}/register", PATH), &body, Auth::None)
            .await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_one(env.into_single(), message);
        })
    }

    /// Logs in and persists the bearer token from the response.
    ///
    /// On failure the previously stored credential is left untouched, so a
    /// mistyped password does not log the admin out.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        self.state.begin();
        let body = json!({ "email": email, "password": password });
        let outcome = self
            .client
            .post_json(&format!("{}/login", PATH), &body, Auth::None)
            .await;

        let envelope = match outcome {
            Ok(envelope) => envelope,
            Err(e) => {
                self.state.fail(e.to_string());
                return Err(e);
            }
        };

        let token = envelope
            .result_value()
            .and_then(|v| v.get("token"))
            .and_then(Value::as_str)
            .map(str::to_string);
        if let Some(token) = token {
            if let Err(e) = self.client.credentials().store(&token) {
                let err = ApiError::Credential(e.to_string());
                self.state.fail(err.to_string());
                return Err(err);
            }
            tracing::debug!("credential stored after login");
        }

        let message = envelope.message.clone();
        self.state.fulfill_one(envelope.into_single(), message);
        Ok(())
    }

    /// Fetches the profile for the stored credential. Fails fast with
    /// [`ApiError::Unauthenticated`] when none is stored; no request goes
    /// out in that case.
    pub async fn current_user(&mut self) -> Result<(), ApiError> {
        self.state.begin();
        let outcome = self.client.get(&format!("{}/me", PATH), &[], Auth::Required).await;
        apply(&mut self.state, outcome, |state, env| {
            let message = env.message.clone();
            state.fulfill_one(env.into_single(), message);
        })
    }

    /// Logs out: clears the in-memory profile and the persisted credential.
    /// Purely local; no network round-trip.
    pub fn logout(&mut self) -> Result<(), ApiError> {
        self.client
            .credentials()
            .clear()
            .map_err(|e| ApiError::Credential(e.to_string()))?;
        self.state.reset();
        Ok(())
    }
}
