//! The request gateway: raw HTTP operations against the portfolio backend.
//!
//! The client is stateless with respect to application data. It builds
//! requests, attaches the bearer credential where the call requires one,
//! and decodes response bodies into [`Envelope`]s; merging payloads into
//! resource state is the store layer's job. There are no retries and no
//! request deduplication.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

use super::credentials::CredentialStore;
use super::envelope::Envelope;
use super::error::ApiError;

/// Credential policy for a single call.
///
/// `Required` fails fast with [`ApiError::Unauthenticated`] before any
/// network traffic when no token is stored. `Optional` attaches the token
/// when present and lets the backend decide otherwise; public list endpoints
/// use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    None,
    Optional,
    Required,
}

/// Binary image content for the multipart resources.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// HTTP client for one backend, shared by every resource store.
#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    credentials: Arc<CredentialStore>,
}

impl ApiClient {
    /// Creates a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>, credentials: Arc<CredentialStore>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            http: reqwest::Client::new(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Arc<CredentialStore> {
        &self.credentials
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
        auth: Auth,
    ) -> Result<Envelope, ApiError> {
        tracing::debug!(path, "GET");
        let mut req = self.http.get(self.url(path));
        if !query.is_empty() {
            req = req.query(query);
        }
        self.send(req, auth).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<Envelope, ApiError> {
        tracing::debug!(path, "POST");
        self.send(self.http.post(self.url(path)).json(body), auth).await
    }

    pub async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<Envelope, ApiError> {
        tracing::debug!(path, "PATCH");
        self.send(self.http.patch(self.url(path)).json(body), auth).await
    }

    pub async fn post_form(&self, path: &str, form: Form, auth: Auth) -> Result<Envelope, ApiError> {
        tracing::debug!(path, "POST (multipart)");
        self.send(self.http.post(self.url(path)).multipart(form), auth)
            .await
    }

    pub async fn patch_form(
        &self,
        path: &str,
        form: Form,
        auth: Auth,
    ) -> Result<Envelope, ApiError> {
        tracing::debug!(path, "PATCH (multipart)");
        self.send(self.http.patch(self.url(path)).multipart(form), auth)
            .await
    }

    pub async fn delete(&self, path: &str, auth: Auth) -> Result<Envelope, ApiError> {
        tracing::debug!(path, "DELETE");
        self.send(self.http.delete(self.url(path)), auth).await
    }

    async fn send(&self, req: reqwest::RequestBuilder, auth: Auth) -> Result<Envelope, ApiError> {
        let req = match auth {
            Auth::Required => match self.credentials.token() {
                Some(token) => req.bearer_auth(token),
                None => return Err(ApiError::Unauthenticated),
            },
            Auth::Optional => match self.credentials.token() {
                Some(token) => req.bearer_auth(token),
                None => req,
            },
            Auth::None => req,
        };

        let response = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            tracing::warn!(status = status.as_u16(), %message, "request rejected");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        // Some endpoints answer 2xx with no body at all; treat that as an
        // empty envelope rather than a decode failure.
        if body.trim().is_empty() {
            return Ok(Envelope::default());
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Envelope::from_value(value))
    }
}

/// Builds a multipart body from text fields plus an optional image part,
/// the encoding the file-bearing resources (about, awards, projects,
/// testimonials) use for create and update.
pub(crate) fn multipart_form(fields: Vec<(&'static str, String)>, image: Option<ImageUpload>) -> Form {
    let mut form = Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    if let Some(image) = image {
        form = form.part("image", Part::bytes(image.bytes).file_name(image.file_name));
    }
    form
}

/// Normalizes a configured base URL: default scheme, no trailing slash.
fn normalize_base_url(raw: String) -> String {
    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw
    } else {
        format!("http://{}", raw)
    };
    with_scheme.trim_end_matches('/').to_string()
}
