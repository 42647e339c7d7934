//! Wire types for the EventHub backend

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// Account role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Attendee account
    #[default]
    User,
    /// Account allowed to create events
    Organizer,
}

impl Role {
    /// Wire name of the role
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Organizer => "organizer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `POST /api/auth/login` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Optional display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// `POST /api/auth/register` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    /// Full name
    pub name: String,
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
    /// Requested role
    pub role: Role,
    /// Tax id (organizers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nit: Option<String>,
    /// Contact phone (organizers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Supporting document reference (organizers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

/// `POST /api/events` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEventRequest {
    /// Event title
    pub title: String,
    /// Event description
    pub description: String,
    /// Category label, e.g. `TECNOLOGÍA`
    pub category: String,
    /// Event date, `null` when unset
    pub date: Option<NaiveDate>,
    /// Venue
    pub location: String,
    /// Maximum number of attendees
    pub max_capacity: u32,
    /// Image URL
    pub image: String,
}

/// User as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Backend identifier; numeric ids are kept in their decimal form
    #[serde(deserialize_with = "number_or_string")]
    pub id: String,
    /// Display name; empty when the backend omits it
    #[serde(default)]
    pub name: String,
    /// Email address
    pub email: String,
    /// Role, `user` when absent
    #[serde(default)]
    pub role: Role,
    /// Events the user is registered for; ids may be numbers or numeric strings
    #[serde(default, alias = "registeredEvents", deserialize_with = "event_ids")]
    pub registered_events: Vec<u64>,
}

/// Success body of the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user
    pub user: UserRecord,
}

/// Event as returned by `POST /api/events`
///
/// Only `title` is guaranteed; everything else the backend sends is kept
/// untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event title
    pub title: String,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Error body; backends disagree on the key
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(u64),
    Text(String),
}

fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match WireId::deserialize(deserializer)? {
        WireId::Number(n) => n.to_string(),
        WireId::Text(s) => s,
    })
}

fn event_ids<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<WireId>::deserialize(deserializer)?
        .into_iter()
        .map(|id| match id {
            WireId::Number(n) => Ok(n),
            WireId::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid event id {s:?}"))),
        })
        .collect()
}
