//! Error types for the EventHub backend client

use thiserror::Error;

/// Errors that can occur when calling the EventHub backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The HTTP client could not be built
    #[error("Client configuration failed: {0}")]
    ClientBuild(String),

    /// HTTP request failed (connection refused, timeout, DNS)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Backend answered with a non-success status
    #[error("API error (status {status}): {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Message from the response body, if the backend sent one
        message: Option<String>,
    },
}

impl ApiError {
    /// Message provided by the backend, if any
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Message to show the user: the backend's own, or `fallback`
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}
