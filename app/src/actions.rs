//! Every input the EventHub view model accepts.

use crate::forms::{EventEdit, LoginEdit, RegisterEdit};
use crate::types::{AuthMode, CategoryFilter, EventId, View};
use chrono::NaiveDate;
use eventhub_client::{ApiError, EventRecord, UserRecord};
use eventhub_macros::Action;

/// Actions for [`EventHubReducer`](crate::reducer::EventHubReducer)
///
/// Commands come from the user. Events are the outcomes of backend calls,
/// fed back by effects.
#[derive(Action, Clone, Debug, PartialEq)]
pub enum EventHubAction {
    // Navigation
    /// Switch to `view`
    #[command]
    Navigate {
        /// Target view
        view: View,
    },

    /// Open the detail page of `event_id`
    #[command]
    SelectEvent {
        /// Event to show
        event_id: EventId,
    },

    /// Return to the catalog
    #[command]
    Back,

    // Filters
    /// Set the search text
    #[command]
    SetSearch {
        /// Search term
        term: String,
    },

    /// Set the category selector
    #[command]
    SetCategory {
        /// Selected category or `All`
        category: CategoryFilter,
    },

    /// Set or clear the date filter
    #[command]
    SetDate {
        /// Selected date
        date: Option<NaiveDate>,
    },

    /// Reset all filter criteria
    #[command]
    ClearFilters,

    // Auth modal
    /// Open the auth modal, or switch its mode if already open
    #[command]
    OpenAuthModal {
        /// Form to show
        mode: AuthMode,
    },

    /// Close the auth modal; drafts are kept
    #[command]
    CloseAuthModal,

    /// Show or hide the password in the login form
    #[command]
    TogglePasswordVisibility,

    /// Change one login field
    #[command]
    EditLogin(LoginEdit),

    /// Change one registration field
    #[command]
    EditRegistration(RegisterEdit),

    /// Validate and send the login form
    #[command]
    SubmitLogin,

    /// Validate and send the registration form
    #[command]
    SubmitRegistration,

    /// Google sign-in button
    #[command]
    GoogleSignIn,

    /// End the session
    #[command]
    Logout,

    // Registrations
    /// Sign up for an event
    #[command]
    RegisterForEvent {
        /// Event to join
        event_id: EventId,
    },

    /// Withdraw from an event
    #[command]
    CancelRegistration {
        /// Event to leave
        event_id: EventId,
    },

    // Event creation
    /// Change one event form field
    #[command]
    EditEvent(EventEdit),

    /// Validate and send the event form
    #[command]
    SubmitEvent,

    /// Discard the event form and go home
    #[command]
    CancelEventCreation,

    // Notifications
    /// Open the notification panel
    #[command]
    OpenNotifications,

    // Backend outcomes
    /// Login accepted
    #[event]
    LoginSucceeded {
        /// Authenticated user
        user: UserRecord,
    },

    /// Login rejected or unreachable backend
    #[event]
    LoginFailed {
        /// What went wrong
        error: ApiError,
    },

    /// Account created
    #[event]
    AccountCreated {
        /// The new user
        user: UserRecord,
    },

    /// Account creation rejected or unreachable backend
    #[event]
    AccountCreationFailed {
        /// What went wrong
        error: ApiError,
    },

    /// Event stored by the backend
    #[event]
    EventCreated {
        /// Backend's record of the event
        record: EventRecord,
    },

    /// Event creation rejected or unreachable backend
    #[event]
    EventCreationFailed {
        /// What went wrong
        error: ApiError,
    },
}
