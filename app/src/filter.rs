//! Catalog filtering by search text, category and date.

use crate::types::{CategoryFilter, Event};
use chrono::NaiveDate;

/// The three filter criteria shown above the catalog
///
/// Filtering is recomputed on every read; nothing here is cached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Free-text search over title and description
    pub search: String,
    /// Category selector
    pub category: CategoryFilter,
    /// Exact calendar date, if any
    pub date: Option<NaiveDate>,
}

impl EventFilter {
    /// Returns true if no criterion is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category == CategoryFilter::All && self.date.is_none()
    }

    /// Returns true if `event` satisfies every criterion
    #[must_use]
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_lowered(&self.search.to_lowercase(), event)
    }

    /// The visible subsequence of `events`, in catalog order
    #[must_use]
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let needle = self.search.to_lowercase();
        events
            .iter()
            .filter(|event| self.matches_lowered(&needle, event))
            .collect()
    }

    fn matches_lowered(&self, needle: &str, event: &Event) -> bool {
        self.category.accepts(event.category)
            && self.date.is_none_or(|date| date == event.date)
            && matches_search(needle, event)
    }
}

fn matches_search(needle: &str, event: &Event) -> bool {
    needle.is_empty()
        || event.title.to_lowercase().contains(needle)
        || event.description.to_lowercase().contains(needle)
}
