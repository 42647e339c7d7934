//! Domain types for the EventHub client.
//!
//! Events are created elsewhere (seed fixture or organizer submission) and are
//! read-only here; the client never adjusts `registered` for other users.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique, stable identifier for an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    /// Creates an `EventId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Event category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Technology
    #[serde(rename = "TECNOLOGÍA")]
    Technology,
    /// Education
    #[serde(rename = "EDUCACIÓN")]
    Education,
    /// Business
    #[serde(rename = "NEGOCIOS")]
    Business,
    /// Culture
    #[serde(rename = "CULTURA")]
    Culture,
    /// Sports
    #[serde(rename = "DEPORTES")]
    Sports,
}

impl Category {
    /// Every category, in selector order
    pub const ALL: [Self; 5] = [
        Self::Technology,
        Self::Education,
        Self::Business,
        Self::Culture,
        Self::Sports,
    ];

    /// Label used on the wire and in the selector
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "TECNOLOGÍA",
            Self::Education => "EDUCACIÓN",
            Self::Business => "NEGOCIOS",
            Self::Culture => "CULTURA",
            Self::Sports => "DEPORTES",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown category label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Category selector, with the `all` sentinel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only events in this category
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if `category` passes the selector
    #[must_use]
    pub fn accepts(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// An event in the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier
    pub id: EventId,
    /// Title
    pub title: String,
    /// Category
    pub category: Category,
    /// Description
    pub description: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Venue
    pub location: String,
    /// Maximum attendees
    pub max_capacity: u32,
    /// Attendees so far, as last reported by the server
    pub registered: u32,
    /// Image URL
    pub image: String,
}

impl Event {
    /// Returns true if the last known count has reached capacity
    ///
    /// Renderers use this to disable sign-up; the registration workflow
    /// itself does not consult it.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.registered >= self.max_capacity
    }

    /// Seats left according to the last known count
    #[must_use]
    pub const fn remaining_capacity(&self) -> u32 {
        self.max_capacity.saturating_sub(self.registered)
    }
}

/// Screens of the application
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    /// Catalog with search and filters
    #[default]
    #[serde(rename = "home")]
    Home,
    /// Current user's profile and registrations
    #[serde(rename = "profile")]
    Profile,
    /// Single event page
    #[serde(rename = "eventDetail")]
    EventDetail,
    /// Organizer event form
    #[serde(rename = "create-event")]
    CreateEvent,
}

impl View {
    /// Route-style name of the view
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Profile => "profile",
            Self::EventDetail => "eventDetail",
            Self::CreateEvent => "create-event",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which form the auth modal shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Sign-in form
    #[default]
    Login,
    /// Account creation form
    Register,
}
