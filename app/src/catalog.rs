//! The event catalog: the ordered list of events available to filter.
//!
//! There is no listing endpoint; the catalog starts from the built-in seed or
//! from a JSON fixture file with the same shape.

use crate::types::{Category, Event, EventId};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors loading a catalog fixture
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Fixture file could not be read
    #[error("failed to read catalog fixture {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Fixture is not a JSON array of events
    #[error("invalid catalog fixture: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two events share an identifier
    #[error("duplicate event id {0} in catalog")]
    DuplicateId(EventId),
}

/// Ordered, read-only collection of events
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two events share an id.
    pub fn new(events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id) {
                return Err(CatalogError::DuplicateId(event.id));
            }
        }
        Ok(Self { events })
    }

    /// Parse a JSON array of events
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON and
    /// [`CatalogError::DuplicateId`] for repeated ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Load a JSON fixture file
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, plus the
    /// errors of [`Catalog::from_json`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The built-in seed: three upcoming events
    #[must_use]
    pub fn seed() -> Self {
        Self {
            events: vec![
                seed_event(
                    1,
                    "Tech Summit 2025",
                    Category::Technology,
                    "Conferencia anual sobre tecnologías emergentes: AI, ML Web3 y más.",
                    (2025, 11, 15),
                    "Centro de Convenciones",
                    (200, 45),
                    "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=400&h=250&fit=crop",
                ),
                seed_event(
                    2,
                    "Educación del Futuro",
                    Category::Education,
                    "Encuentro para docentes y profesionales, con talleres prácticos sobre metodologías activas",
                    (2025, 11, 20),
                    "Universidad Central",
                    (150, 78),
                    "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?w=400&h=250&fit=crop",
                ),
                seed_event(
                    3,
                    "Foro de Negocios & Startups",
                    Category::Business,
                    "Paneles de inversionistas, pitch de startups y mesas redondas con líderes del ecosistema",
                    (2025, 11, 25),
                    "Hotel Empresarial",
                    (100, 92),
                    "https://images.unsplash.com/photo-1556761175-b413da4baf72?w=400&h=250&fit=crop",
                ),
            ],
        }
    }

    /// All events in catalog order
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Looks up an event by id
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Returns true if an event with this id exists
    #[must_use]
    pub fn contains(&self, id: EventId) -> bool {
        self.get(id).is_some()
    }

    /// Number of events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the catalog has no events
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_event(
    id: u64,
    title: &str,
    category: Category,
    description: &str,
    (year, month, day): (i32, u32, u32),
    location: &str,
    (max_capacity, registered): (u32, u32),
    image: &str,
) -> Event {
    Event {
        id: EventId::new(id),
        title: title.to_string(),
        category,
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        location: location.to_string(),
        max_capacity,
        registered,
        image: image.to_string(),
    }
}
