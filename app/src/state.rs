//! The EventHub view model.

use crate::catalog::Catalog;
use crate::filter::EventFilter;
use crate::forms::{
    EventDraft, EventField, LoginDraft, LoginField, RegisterDraft, RegisterField,
    ValidationErrors,
};
use crate::notifications::NotificationLog;
use crate::session::Session;
use crate::types::{AuthMode, Event, EventId, View};

/// Auth modal visibility and mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthModal {
    /// Whether the modal is shown
    pub open: bool,
    /// Login or registration form
    pub mode: AuthMode,
    /// Password shown in clear text
    pub show_password: bool,
}

/// Everything a renderer needs to draw the application
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventHubState {
    /// Current screen
    pub view: View,
    /// Event shown on the detail page
    pub selected_event: Option<EventId>,
    /// Events available for browsing
    pub catalog: Catalog,
    /// Catalog filter criteria
    pub filter: EventFilter,
    /// Signed-in user, if any
    pub session: Option<Session>,
    /// Outcome messages
    pub notifications: NotificationLog,
    /// Auth modal
    pub auth_modal: AuthModal,
    /// Login form
    pub login_draft: LoginDraft,
    /// Inline login errors from the last submission
    pub login_errors: ValidationErrors<LoginField>,
    /// Registration form
    pub register_draft: RegisterDraft,
    /// Inline registration errors from the last submission
    pub register_errors: ValidationErrors<RegisterField>,
    /// Organizer event form
    pub event_draft: EventDraft,
    /// Inline event form errors from the last submission
    pub event_errors: ValidationErrors<EventField>,
}

impl Default for EventHubState {
    fn default() -> Self {
        Self::new(Catalog::seed())
    }
}

impl EventHubState {
    /// Signed-out state on the home view over `catalog`
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            view: View::Home,
            selected_event: None,
            catalog,
            filter: EventFilter::default(),
            session: None,
            notifications: NotificationLog::default(),
            auth_modal: AuthModal::default(),
            login_draft: LoginDraft::default(),
            login_errors: ValidationErrors::default(),
            register_draft: RegisterDraft::default(),
            register_errors: ValidationErrors::default(),
            event_draft: EventDraft::default(),
            event_errors: ValidationErrors::default(),
        }
    }

    /// Start signed in as `session`
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Catalog events passing the current filter, in catalog order
    #[must_use]
    pub fn visible_events(&self) -> Vec<&Event> {
        self.filter.apply(self.catalog.events())
    }

    /// Number of events passing the current filter
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_events().len()
    }

    /// The selected event, if one is selected and still in the catalog
    #[must_use]
    pub fn detail(&self) -> Option<&Event> {
        self.selected_event.and_then(|id| self.catalog.get(id))
    }

    /// Catalog events the user is registered for, in catalog order
    #[must_use]
    pub fn registered_catalog_events(&self) -> Vec<&Event> {
        self.session.as_ref().map_or_else(Vec::new, |session| {
            self.catalog
                .events()
                .iter()
                .filter(|event| session.is_registered(event.id))
                .collect()
        })
    }

    /// Returns true if the user is signed in and registered for `event_id`
    #[must_use]
    pub fn is_registered(&self, event_id: EventId) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.is_registered(event_id))
    }

    /// Returns true if a user is signed in
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Returns true if the signed-in user may create events
    #[must_use]
    pub fn can_create_events(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_organizer)
    }
}
