//! # EventHub Backend Client
//!
//! Rust client for the three backend calls the EventHub client makes:
//! login, account registration, and event creation.
//!
//! ## Example
//!
//! ```no_run
//! use eventhub_client::{EventHubClient, LoginRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EventHubClient::new("http://localhost:3000");
//!
//!     let response = client
//!         .login(&LoginRequest {
//!             name: None,
//!             email: "ana@example.com".into(),
//!             password: "secret1".into(),
//!         })
//!         .await?;
//!
//!     println!("Logged in as {}", response.user.name);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::EventHubClient;
pub use error::ApiError;
pub use types::{
    AuthResponse, CreateEventRequest, EventRecord, LoginRequest, RegisterRequest, Role, UserRecord,
};
