//! Configuration management for the EventHub client.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::catalog::{Catalog, CatalogError};
use crate::environment::HttpBackend;
use eventhub_client::{ApiError, EventHubClient};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors turning configuration into runtime pieces
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The catalog fixture could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The HTTP client could not be built
    #[error(transparent)]
    Client(#[from] ApiError),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    pub api: ApiConfig,
    /// Catalog source
    pub catalog: CatalogConfig,
    /// Logging configuration
    pub log: LogConfig,
    /// Demo binary settings
    pub demo: DemoConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are appended to
    pub url: String,
    /// Request timeout in seconds; `None` waits indefinitely
    pub request_timeout_secs: Option<u64>,
}

/// Catalog source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON fixture replacing the built-in seed
    pub path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset
    pub filter: String,
}

/// Demo binary settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// How long to wait for each backend outcome, in seconds
    pub wait_secs: u64,
    /// Email the demo signs in with
    pub email: String,
    /// Password the demo signs in with
    pub password: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig {
                url: env::var("EVENTHUB_API_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
                request_timeout_secs: env::var("EVENTHUB_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok()),
            },
            catalog: CatalogConfig {
                path: env::var("EVENTHUB_CATALOG_PATH")
                    .ok()
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from),
            },
            log: LogConfig {
                filter: env::var("EVENTHUB_LOG").unwrap_or_else(|_| "eventhub=info".to_string()),
            },
            demo: DemoConfig {
                wait_secs: env::var("EVENTHUB_WAIT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
                email: env::var("EVENTHUB_DEMO_EMAIL")
                    .unwrap_or_else(|_| "demo@eventhub.local".to_string()),
                password: env::var("EVENTHUB_DEMO_PASSWORD")
                    .unwrap_or_else(|_| "demo1234".to_string()),
            },
        }
    }

    /// Build the HTTP backend for the configured API
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Client`] if a timeout is set and the client
    /// cannot be built.
    pub fn backend(&self) -> Result<HttpBackend, ConfigError> {
        let client = match self.api.request_timeout_secs {
            Some(secs) => {
                EventHubClient::with_timeout(&self.api.url, Duration::from_secs(secs))?
            },
            None => EventHubClient::new(&self.api.url),
        };
        Ok(HttpBackend::new(client))
    }

    /// The configured catalog, or the built-in seed
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Catalog`] if the fixture cannot be loaded.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog.path {
            Some(path) => Ok(Catalog::from_json_file(path)?),
            None => Ok(Catalog::seed()),
        }
    }

    /// How long the demo waits for a backend outcome
    #[must_use]
    pub const fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.demo.wait_secs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api: ApiConfig {
                url: "http://api.test/".into(),
                request_timeout_secs: None,
            },
            catalog: CatalogConfig { path: None },
            log: LogConfig {
                filter: "eventhub=debug".into(),
            },
            demo: DemoConfig {
                wait_secs: 3,
                email: "demo@eventhub.local".into(),
                password: "demo1234".into(),
            },
        }
    }

    #[test]
    fn seed_catalog_without_a_path() {
        assert_eq!(config().load_catalog().unwrap(), Catalog::seed());
    }

    #[test]
    fn catalog_fixture_from_path() {
        let mut config = config();
        config.catalog.path = Some(PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/fixtures/events.json"
        )));
        assert_eq!(config.load_catalog().unwrap().len(), 5);

        config.catalog.path = Some(PathBuf::from("/nonexistent.json"));
        assert!(matches!(
            config.load_catalog(),
            Err(ConfigError::Catalog(CatalogError::Io { .. }))
        ));
    }

    #[test]
    fn backend_builds_with_and_without_timeout() {
        let mut config = config();
        assert!(config.backend().is_ok());

        config.api.request_timeout_secs = Some(5);
        assert!(config.backend().is_ok());
        assert_eq!(config.wait_timeout(), Duration::from_secs(3));
    }
}
