//! # EventHub
//!
//! View model for browsing, filtering and signing up for events, with account
//! login/registration and organizer event creation.
//!
//! Everything runs through one loop: a renderer dispatches an
//! [`EventHubAction`] to a [`Store`](eventhub_runtime::Store), the
//! [`EventHubReducer`] updates [`EventHubState`], and backend calls run as
//! effects whose outcomes come back as further actions.
//!
//! ## Example
//!
//! ```no_run
//! use eventhub::{
//!     EventHubAction, EventHubEnvironment, EventHubReducer, EventHubState, HttpBackend,
//! };
//! use eventhub_client::EventHubClient;
//! use eventhub_core::environment::SystemClock;
//! use eventhub_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<(), eventhub_runtime::StoreError> {
//! let env = EventHubEnvironment::new(
//!     Arc::new(SystemClock),
//!     Arc::new(HttpBackend::new(EventHubClient::new("http://localhost:3000"))),
//! );
//! let store = Store::new(EventHubState::default(), EventHubReducer::new(), env);
//!
//! store
//!     .send(EventHubAction::SetSearch { term: "tech".into() })
//!     .await?;
//! let visible = store.state(|s| s.visible_count()).await;
//! assert_eq!(visible, 1);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod catalog;
pub mod config;
pub mod environment;
pub mod filter;
pub mod forms;
pub mod notifications;
pub mod reducer;
pub mod session;
pub mod state;
pub mod types;

pub use actions::EventHubAction;
pub use catalog::{Catalog, CatalogError};
pub use config::{Config, ConfigError};
pub use environment::{Backend, EventHubEnvironment, HttpBackend, StubBackend};
pub use filter::EventFilter;
pub use notifications::{Notification, NotificationLog, Severity};
pub use reducer::EventHubReducer;
pub use session::Session;
pub use state::{AuthModal, EventHubState};
pub use types::{AuthMode, Category, CategoryFilter, Event, EventId, View};
