//! The signed-in user.
//!
//! A session is never edited in place: every change builds a new record that
//! replaces the old one in state.

use crate::types::EventId;
use eventhub_client::{Role, UserRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registration conflicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The event is already in the user's registered set
    #[error("already registered for event {0}")]
    AlreadyRegistered(EventId),
}

/// Authenticated user and their registrations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Backend user id
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Account role
    pub role: Role,
    registered_events: Vec<EventId>,
}

impl Session {
    /// Create a session with no registrations
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            registered_events: Vec::new(),
        }
    }

    /// Build a session from the user returned by the auth endpoints
    ///
    /// Repeated ids in the backend's list are kept once, first occurrence wins.
    /// A blank name falls back to the local part of the email.
    #[must_use]
    pub fn from_user(user: UserRecord) -> Self {
        let mut registered_events: Vec<EventId> = Vec::with_capacity(user.registered_events.len());
        for id in user.registered_events.into_iter().map(EventId::new) {
            if !registered_events.contains(&id) {
                registered_events.push(id);
            }
        }

        let name = match user.name.trim() {
            "" => user.email.split('@').next().unwrap_or_default().to_string(),
            name => name.to_string(),
        };

        Self {
            id: user.id,
            name,
            email: user.email,
            role: user.role,
            registered_events,
        }
    }

    /// Registered event ids, in registration order
    #[must_use]
    pub fn registered_events(&self) -> &[EventId] {
        &self.registered_events
    }

    /// Returns true if the user is registered for `event_id`
    #[must_use]
    pub fn is_registered(&self, event_id: EventId) -> bool {
        self.registered_events.contains(&event_id)
    }

    /// Returns true for organizer accounts
    #[must_use]
    pub fn is_organizer(&self) -> bool {
        self.role == Role::Organizer
    }

    /// A copy of this session with `event_id` appended
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::AlreadyRegistered`] if the id is already present.
    pub fn with_registration(&self, event_id: EventId) -> Result<Self, RegistrationError> {
        if self.is_registered(event_id) {
            return Err(RegistrationError::AlreadyRegistered(event_id));
        }

        let mut next = self.clone();
        next.registered_events.push(event_id);
        Ok(next)
    }

    /// A copy of this session without `event_id`; absent ids are fine
    #[must_use]
    pub fn without_registration(&self, event_id: EventId) -> Self {
        let mut next = self.clone();
        next.registered_events.retain(|id| *id != event_id);
        next
    }

    /// Avatar letter: the upper-cased first character of the name
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Role as shown in the profile header
    #[must_use]
    pub const fn role_label(&self) -> &'static str {
        match self.role {
            Role::User => "User",
            Role::Organizer => "Organizer",
        }
    }
}
