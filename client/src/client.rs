//! EventHub backend client implementation

use crate::{
    error::ApiError,
    types::{AuthResponse, CreateEventRequest, ErrorBody, EventRecord, LoginRequest, RegisterRequest},
};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

/// Login endpoint
pub const LOGIN_PATH: &str = "/api/auth/login";
/// Registration endpoint
pub const REGISTER_PATH: &str = "/api/auth/register";
/// Event creation endpoint
pub const EVENTS_PATH: &str = "/api/events";

/// EventHub backend client
///
/// One POST per call, JSON in and out. No retries: a failed request is
/// reported once and the user resubmits.
#[derive(Clone, Debug)]
pub struct EventHubClient {
    client: Client,
    base_url: String,
}

impl EventHubClient {
    /// Create a client for `base_url` without a request timeout
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize(base_url.into()),
        }
    }

    /// Create a client whose requests give up after `timeout`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the TLS backend cannot be initialized.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: normalize(base_url.into()),
        })
    }

    /// Base URL every path is appended to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Log in with email and password
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx answers, or unparsable bodies
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post(LOGIN_PATH, request).await
    }

    /// Create an account
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx answers, or unparsable bodies
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post(REGISTER_PATH, request).await
    }

    /// Create an event (organizers)
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx answers, or unparsable bodies
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<EventRecord, ApiError> {
        self.post(EVENTS_PATH, request).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%url, error = %e, "Request failed");
                ApiError::RequestFailed(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::ResponseParseFailed(e.to_string()));
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(ErrorBody::into_message);

        tracing::warn!(%url, status = status.as_u16(), ?message, "Backend rejected request");

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

fn normalize(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}
