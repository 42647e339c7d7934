//! Newest-first notification log with an unread flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Notification severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral information
    Info,
    /// Something failed
    Error,
    /// Something succeeded
    Success,
}

/// A single log entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Creation time in milliseconds; unique within a log
    pub id: i64,
    /// Text shown to the user
    pub message: String,
    /// Severity
    pub severity: Severity,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Notification log
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    has_unread: bool,
}

impl NotificationLog {
    /// Prepend a notification and set the unread flag; returns its id
    pub fn push(
        &mut self,
        now: DateTime<Utc>,
        severity: Severity,
        message: impl Into<String>,
    ) -> i64 {
        let millis = now.timestamp_millis();
        // Entries are newest-first, so the front holds the largest id.
        let id = match self.entries.front() {
            Some(newest) if newest.id >= millis => newest.id + 1,
            _ => millis,
        };

        self.entries.push_front(Notification {
            id,
            message: message.into(),
            severity,
            created_at: now,
        });
        self.has_unread = true;
        id
    }

    /// Entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.front()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was ever logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if something was logged since the panel was last opened
    #[must_use]
    pub const fn has_unread(&self) -> bool {
        self.has_unread
    }

    /// Clear the unread flag
    pub fn mark_read(&mut self) {
        self.has_unread = false;
    }
}
