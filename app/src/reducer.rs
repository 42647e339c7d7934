//! EventHub reducer: every state transition of the application.
//!
//! User intents are handled synchronously. Auth and event creation validate
//! locally and then return a future effect that calls the backend and feeds
//! the outcome back as an event action.

use crate::actions::EventHubAction;
use crate::environment::EventHubEnvironment;
use crate::filter::EventFilter;
use crate::forms::{EventDraft, LoginDraft, RegisterDraft, ValidationErrors};
use crate::notifications::Severity;
use crate::session::{RegistrationError, Session};
use crate::state::EventHubState;
use crate::types::{AuthMode, EventId, View};
use eventhub_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Fallback shown when a failed login carries no server message
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
/// Fallback shown when a failed account creation carries no server message
pub const ACCOUNT_CREATION_FAILED: &str = "Registration failed. Please try again.";
/// Fallback shown when a failed event creation carries no server message
pub const EVENT_CREATION_FAILED: &str = "Could not create the event. Please try again.";

/// Reducer for the whole application
#[derive(Clone, Copy, Debug, Default)]
pub struct EventHubReducer;

impl EventHubReducer {
    /// Creates a new `EventHubReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn notify(
        state: &mut EventHubState,
        env: &EventHubEnvironment,
        severity: Severity,
        message: impl Into<String>,
    ) {
        state.notifications.push(env.clock.now(), severity, message);
    }

    fn require_organizer(state: &mut EventHubState, env: &EventHubEnvironment) -> bool {
        if state.can_create_events() {
            return true;
        }
        tracing::debug!("Event creation refused: not an organizer");
        Self::notify(
            state,
            env,
            Severity::Error,
            "Only organizers can create events",
        );
        false
    }

    fn register_for_event(
        state: &mut EventHubState,
        env: &EventHubEnvironment,
        event_id: EventId,
    ) {
        let Some(session) = state.session.as_ref() else {
            tracing::debug!(%event_id, "Registration needs a session; opening login");
            state.auth_modal.open = true;
            state.auth_modal.mode = AuthMode::Login;
            return;
        };

        match session.with_registration(event_id) {
            Ok(next) => {
                tracing::info!(%event_id, user = %next.id, "Registered for event");
                state.session = Some(next);
                Self::notify(
                    state,
                    env,
                    Severity::Success,
                    "You're registered! A confirmation email is on its way.",
                );
            },
            Err(RegistrationError::AlreadyRegistered(_)) => {
                tracing::debug!(%event_id, "Duplicate registration rejected");
                Self::notify(
                    state,
                    env,
                    Severity::Error,
                    "You are already registered for this event",
                );
            },
        }
    }

    fn cancel_registration(
        state: &mut EventHubState,
        env: &EventHubEnvironment,
        event_id: EventId,
    ) {
        let Some(session) = state.session.as_ref() else {
            return;
        };

        let next = session.without_registration(event_id);
        tracing::info!(%event_id, user = %next.id, "Registration cancelled");
        state.session = Some(next);
        Self::notify(
            state,
            env,
            Severity::Info,
            "Your registration has been cancelled.",
        );
    }

    fn sign_in(state: &mut EventHubState, session: Session) {
        state.session = Some(session);
        state.auth_modal.open = false;
        state.auth_modal.show_password = false;
    }
}

impl Reducer for EventHubReducer {
    type State = EventHubState;
    type Action = EventHubAction;
    type Environment = EventHubEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per action
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Navigation ==========
            EventHubAction::Navigate { view } => {
                if view == View::CreateEvent && !Self::require_organizer(state, env) {
                    return SmallVec::new();
                }
                state.view = view;
            },

            EventHubAction::SelectEvent { event_id } => {
                if state.catalog.contains(event_id) {
                    state.selected_event = Some(event_id);
                    state.view = View::EventDetail;
                } else {
                    tracing::debug!(%event_id, "Ignoring selection of unknown event");
                }
            },

            EventHubAction::Back => state.view = View::Home,

            // ========== Filters ==========
            EventHubAction::SetSearch { term } => state.filter.search = term,

            EventHubAction::SetCategory { category } => state.filter.category = category,

            EventHubAction::SetDate { date } => state.filter.date = date,

            EventHubAction::ClearFilters => state.filter = EventFilter::default(),

            // ========== Auth ==========
            EventHubAction::OpenAuthModal { mode } => {
                state.auth_modal.open = true;
                state.auth_modal.mode = mode;
            },

            EventHubAction::CloseAuthModal => state.auth_modal.open = false,

            EventHubAction::TogglePasswordVisibility => {
                state.auth_modal.show_password = !state.auth_modal.show_password;
            },

            EventHubAction::EditLogin(edit) => state.login_draft.apply(edit),

            EventHubAction::EditRegistration(edit) => state.register_draft.apply(edit),

            EventHubAction::SubmitLogin => match state.login_draft.validate() {
                Err(errors) => {
                    tracing::debug!(failed = errors.len(), "Login form invalid");
                    state.login_errors = errors;
                },
                Ok(request) => {
                    state.login_errors = ValidationErrors::default();
                    let backend = env.backend.clone();
                    return smallvec![Effect::future(async move {
                        Some(match backend.login(request).await {
                            Ok(response) => EventHubAction::LoginSucceeded {
                                user: response.user,
                            },
                            Err(error) => EventHubAction::LoginFailed { error },
                        })
                    })];
                },
            },

            EventHubAction::SubmitRegistration => match state.register_draft.validate() {
                Err(errors) => {
                    tracing::debug!(failed = errors.len(), "Registration form invalid");
                    state.register_errors = errors;
                },
                Ok(request) => {
                    state.register_errors = ValidationErrors::default();
                    let backend = env.backend.clone();
                    return smallvec![Effect::future(async move {
                        Some(match backend.register(request).await {
                            Ok(response) => EventHubAction::AccountCreated {
                                user: response.user,
                            },
                            Err(error) => EventHubAction::AccountCreationFailed { error },
                        })
                    })];
                },
            },

            EventHubAction::GoogleSignIn => Self::notify(
                state,
                env,
                Severity::Info,
                "Google sign-in is not available yet",
            ),

            EventHubAction::Logout => {
                if let Some(session) = state.session.take() {
                    tracing::info!(user = %session.id, "Signed out");
                }
                state.view = View::Home;
            },

            EventHubAction::LoginSucceeded { user } => {
                tracing::info!(user = %user.id, role = %user.role, "Signed in");
                let session = Session::from_user(user);
                let welcome = format!("Welcome back, {}!", session.name);
                Self::sign_in(state, session);
                state.login_draft = LoginDraft::default();
                state.login_errors = ValidationErrors::default();
                Self::notify(state, env, Severity::Success, welcome);
            },

            EventHubAction::LoginFailed { error } => {
                tracing::warn!(%error, "Login failed");
                Self::notify(state, env, Severity::Error, error.user_message(LOGIN_FAILED));
            },

            EventHubAction::AccountCreated { user } => {
                tracing::info!(user = %user.id, role = %user.role, "Account created");
                let session = Session::from_user(user);
                let welcome = format!("Account created. Welcome, {}!", session.name);
                Self::sign_in(state, session);
                state.register_draft = RegisterDraft::default();
                state.register_errors = ValidationErrors::default();
                Self::notify(state, env, Severity::Success, welcome);
            },

            EventHubAction::AccountCreationFailed { error } => {
                tracing::warn!(%error, "Account creation failed");
                Self::notify(
                    state,
                    env,
                    Severity::Error,
                    error.user_message(ACCOUNT_CREATION_FAILED),
                );
            },

            // ========== Registrations ==========
            EventHubAction::RegisterForEvent { event_id } => {
                Self::register_for_event(state, env, event_id);
            },

            EventHubAction::CancelRegistration { event_id } => {
                Self::cancel_registration(state, env, event_id);
            },

            // ========== Event creation ==========
            EventHubAction::EditEvent(edit) => state.event_draft.apply(edit),

            EventHubAction::SubmitEvent => {
                if !Self::require_organizer(state, env) {
                    return SmallVec::new();
                }
                match state.event_draft.validate() {
                    Err(errors) => state.event_errors = errors,
                    Ok(request) => {
                        state.event_errors = ValidationErrors::default();
                        let backend = env.backend.clone();
                        return smallvec![Effect::future(async move {
                            Some(match backend.create_event(request).await {
                                Ok(record) => EventHubAction::EventCreated { record },
                                Err(error) => EventHubAction::EventCreationFailed { error },
                            })
                        })];
                    },
                }
            },

            EventHubAction::CancelEventCreation => {
                state.event_draft = EventDraft::default();
                state.event_errors = ValidationErrors::default();
                state.view = View::Home;
            },

            EventHubAction::EventCreated { record } => {
                tracing::info!(title = %record.title, "Event created");
                Self::notify(
                    state,
                    env,
                    Severity::Success,
                    format!("Event \"{}\" created", record.title),
                );
                state.event_draft = EventDraft::default();
                state.view = View::Home;
            },

            EventHubAction::EventCreationFailed { error } => {
                tracing::warn!(%error, "Event creation failed");
                Self::notify(
                    state,
                    env,
                    Severity::Error,
                    error.user_message(EVENT_CREATION_FAILED),
                );
            },

            // ========== Notifications ==========
            EventHubAction::OpenNotifications => state.notifications.mark_read(),
        }

        SmallVec::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::environment::{BackendCall, StubBackend};
    use crate::forms::{EventEdit, EventField, LoginEdit, LoginField, RegisterEdit, RegisterField};
    use crate::notifications::Notification;
    use crate::types::{Category, CategoryFilter};
    use eventhub_client::{ApiError, AuthResponse, EventRecord, Role, UserRecord};
    use eventhub_testing::{ReducerTest, assertions, resolve_effects, test_clock};
    use std::sync::Arc;

    const NOW_MILLIS: i64 = 1_761_987_600_000;

    fn env_with(backend: &Arc<StubBackend>) -> EventHubEnvironment {
        EventHubEnvironment::new(Arc::new(test_clock()), backend.clone())
    }

    fn env() -> EventHubEnvironment {
        env_with(&Arc::new(StubBackend::new()))
    }

    fn ana() -> Session {
        Session::new("1", "Ana", "ana@example.com", Role::User)
    }

    fn organizer() -> Session {
        Session::new("2", "Olga", "olga@example.com", Role::Organizer)
    }

    fn user_record(name: &str, role: Role, events: Vec<u64>) -> UserRecord {
        UserRecord {
            id: "u-1".into(),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            role,
            registered_events: events,
        }
    }

    fn latest(state: &EventHubState) -> &Notification {
        state.notifications.latest().unwrap()
    }

    /// Reduce `action`, run its effects and reduce whatever they feed back
    fn run_flow(
        state: &mut EventHubState,
        env: &EventHubEnvironment,
        action: EventHubAction,
    ) -> Vec<EventHubAction> {
        let reducer = EventHubReducer::new();
        let effects = reducer.reduce(state, action, env);
        let feedback = tokio_test::block_on(resolve_effects(effects));
        for action in feedback.clone() {
            let more = reducer.reduce(state, action, env);
            assertions::assert_no_effects(&more);
        }
        feedback
    }

    // ========== Filters ==========

    #[test]
    fn technology_filter_shows_only_event_one() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::SetCategory {
                category: CategoryFilter::Only(Category::Technology),
            })
            .then_state(|state| {
                let ids: Vec<u64> = state.visible_events().iter().map(|e| e.id.value()).collect();
                assert_eq!(ids, vec![1]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn clear_filters_resets_every_criterion() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::SetSearch {
                term: "zzz".into(),
            })
            .when_action(EventHubAction::SetDate {
                date: chrono::NaiveDate::from_ymd_opt(2025, 11, 15),
            })
            .when_action(EventHubAction::ClearFilters)
            .then_state(|state| {
                assert!(state.filter.is_empty());
                assert_eq!(state.visible_count(), 3);
            })
            .run();
    }

    // ========== Registration workflow ==========

    #[test]
    fn register_for_event_appends_and_notifies() {
        let session = ana().with_registration(EventId::new(1)).unwrap();

        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default().with_session(session))
            .when_action(EventHubAction::RegisterForEvent {
                event_id: EventId::new(3),
            })
            .then_state(|state| {
                let session = state.session.as_ref().unwrap();
                assert_eq!(session.registered_events(), &[EventId::new(1), EventId::new(3)]);
                assert_eq!(state.notifications.len(), 1);
                assert_eq!(latest(state).severity, Severity::Success);
                assert_eq!(latest(state).id, NOW_MILLIS);
                assert!(state.notifications.has_unread());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn registering_twice_keeps_one_id_and_reports_an_error() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default().with_session(ana()))
            .when_action(EventHubAction::RegisterForEvent {
                event_id: EventId::new(2),
            })
            .when_action(EventHubAction::RegisterForEvent {
                event_id: EventId::new(2),
            })
            .then_state(|state| {
                assert_eq!(
                    state.session.as_ref().unwrap().registered_events(),
                    &[EventId::new(2)]
                );
                let severities: Vec<Severity> =
                    state.notifications.iter().map(|n| n.severity).collect();
                assert_eq!(severities, vec![Severity::Error, Severity::Success]);
            })
            .run();
    }

    #[test]
    fn registering_without_a_session_opens_login() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::RegisterForEvent {
                event_id: EventId::new(1),
            })
            .then_state(|state| {
                assert!(state.session.is_none());
                assert!(state.auth_modal.open);
                assert_eq!(state.auth_modal.mode, AuthMode::Login);
                assert!(state.notifications.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn cancelling_an_unregistered_event_keeps_the_set() {
        let session = ana().with_registration(EventId::new(1)).unwrap();

        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default().with_session(session))
            .when_action(EventHubAction::CancelRegistration {
                event_id: EventId::new(2),
            })
            .then_state(|state| {
                assert_eq!(
                    state.session.as_ref().unwrap().registered_events(),
                    &[EventId::new(1)]
                );
                assert_eq!(latest(state).severity, Severity::Info);
            })
            .run();
    }

    #[test]
    fn cancel_removes_the_id() {
        let session = ana()
            .with_registration(EventId::new(1))
            .unwrap()
            .with_registration(EventId::new(3))
            .unwrap();

        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default().with_session(session))
            .when_action(EventHubAction::CancelRegistration {
                event_id: EventId::new(1),
            })
            .then_state(|state| {
                assert_eq!(
                    state.session.as_ref().unwrap().registered_events(),
                    &[EventId::new(3)]
                );
            })
            .run();
    }

    #[test]
    fn cancel_without_a_session_does_nothing() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::CancelRegistration {
                event_id: EventId::new(1),
            })
            .then_state(|state| assert_eq!(*state, EventHubState::default()))
            .run();
    }

    // ========== Auth ==========

    #[test]
    fn login_with_empty_email_is_blocked_before_the_backend() {
        let backend = Arc::new(StubBackend::new());
        let recorded = backend.clone();

        ReducerTest::new(EventHubReducer::new())
            .with_env(env_with(&backend))
            .given_state(EventHubState::default())
            .when_action(EventHubAction::EditLogin(LoginEdit::Password("secret1".into())))
            .when_action(EventHubAction::SubmitLogin)
            .then_state(|state| {
                assert_eq!(state.login_errors.get(&LoginField::Email), Some("Email is required"));
                assert_eq!(state.login_errors.get(&LoginField::Password), None);
                assert!(state.session.is_none());
            })
            .then_effects(move |effects| {
                assertions::assert_no_effects(effects);
                assert!(recorded.calls().is_empty());
            })
            .run();
    }

    #[test]
    fn register_with_short_password_is_blocked() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::EditRegistration(RegisterEdit::Name("Ana".into())))
            .when_action(EventHubAction::EditRegistration(RegisterEdit::Email(
                "ana@example.com".into(),
            )))
            .when_action(EventHubAction::EditRegistration(RegisterEdit::Password(
                "1234567".into(),
            )))
            .when_action(EventHubAction::SubmitRegistration)
            .then_state(|state| {
                let message = state.register_errors.get(&RegisterField::Password).unwrap();
                assert!(message.contains("at least 8 characters"));
                assert_eq!(state.register_errors.len(), 1);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn valid_login_returns_a_backend_effect() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::EditLogin(LoginEdit::Email("ana@example.com".into())))
            .when_action(EventHubAction::EditLogin(LoginEdit::Password("secret1".into())))
            .when_action(EventHubAction::SubmitLogin)
            .then_state(|state| assert!(state.login_errors.is_empty()))
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn login_without_a_name_uses_the_email_local_part() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::LoginSucceeded {
                user: UserRecord {
                    id: "5".into(),
                    name: String::new(),
                    email: "lucia@example.com".into(),
                    role: Role::User,
                    registered_events: vec![2],
                },
            })
            .then_state(|state| {
                let session = state.session.as_ref().unwrap();
                assert_eq!(session.name, "lucia");
                assert_eq!(session.registered_events(), &[EventId::new(2)]);
                assert_eq!(latest(state).severity, Severity::Success);
                assert_eq!(latest(state).message, "Welcome back, lucia!");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn successful_login_replaces_session_and_closes_modal() {
        let backend = Arc::new(
            StubBackend::new().with_login(Ok(AuthResponse {
                user: user_record("Ana", Role::User, vec![1]),
            })),
        );
        let env = env_with(&backend);
        let mut state = EventHubState::default();
        state.auth_modal.open = true;
        state.login_draft = LoginDraft {
            name: String::new(),
            email: "ana@example.com".into(),
            password: "secret1".into(),
        };

        let feedback = run_flow(&mut state, &env, EventHubAction::SubmitLogin);

        assert!(matches!(feedback.as_slice(), [EventHubAction::LoginSucceeded { .. }]));
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.name, "Ana");
        assert_eq!(session.registered_events(), &[EventId::new(1)]);
        assert!(!state.auth_modal.open);
        assert_eq!(state.login_draft, LoginDraft::default());
        assert_eq!(latest(&state).severity, Severity::Success);
        assert_eq!(
            backend.calls(),
            vec![BackendCall::Login(eventhub_client::LoginRequest {
                name: None,
                email: "ana@example.com".into(),
                password: "secret1".into(),
            })]
        );
    }

    #[test]
    fn rejected_login_keeps_modal_and_draft() {
        let backend = Arc::new(StubBackend::new().with_login(Err(ApiError::Rejected {
            status: 401,
            message: Some("Invalid credentials".into()),
        })));
        let env = env_with(&backend);
        let mut state = EventHubState::default();
        state.auth_modal.open = true;
        state.login_draft.email = "ana@example.com".into();
        state.login_draft.password = "wrongpw".into();
        let draft = state.login_draft.clone();

        run_flow(&mut state, &env, EventHubAction::SubmitLogin);

        assert!(state.session.is_none());
        assert!(state.auth_modal.open);
        assert_eq!(state.login_draft, draft);
        assert_eq!(latest(&state).severity, Severity::Error);
        assert_eq!(latest(&state).message, "Invalid credentials");
    }

    #[test]
    fn unreachable_backend_uses_the_fallback_message() {
        let env = env();
        let mut state = EventHubState::default();
        state.register_draft = RegisterDraft {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "longenough".into(),
            ..RegisterDraft::default()
        };

        let feedback = run_flow(&mut state, &env, EventHubAction::SubmitRegistration);

        assert!(matches!(
            feedback.as_slice(),
            [EventHubAction::AccountCreationFailed { .. }]
        ));
        assert_eq!(latest(&state).message, ACCOUNT_CREATION_FAILED);
        assert_eq!(state.register_draft.name, "Ana");
    }

    #[test]
    fn account_creation_signs_in_as_organizer() {
        let backend = Arc::new(StubBackend::new().with_register(Ok(AuthResponse {
            user: user_record("Olga", Role::Organizer, vec![]),
        })));
        let env = env_with(&backend);
        let mut state = EventHubState::default();
        state.register_draft = RegisterDraft {
            name: "Olga".into(),
            email: "olga@example.com".into(),
            password: "longenough".into(),
            role: Role::Organizer,
            phone: "555-0100".into(),
            ..RegisterDraft::default()
        };

        run_flow(&mut state, &env, EventHubAction::SubmitRegistration);

        assert!(state.can_create_events());
        assert_eq!(state.register_draft, RegisterDraft::default());
        let calls = backend.calls();
        let [BackendCall::Register(request)] = calls.as_slice() else {
            panic!("expected one registration call, got {calls:?}");
        };
        assert_eq!(request.phone.as_deref(), Some("555-0100"));
        assert_eq!(request.nit, None);
    }

    #[test]
    fn close_modal_keeps_drafts_and_toggle_flips_visibility() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::OpenAuthModal {
                mode: AuthMode::Register,
            })
            .when_action(EventHubAction::EditRegistration(RegisterEdit::Name("Ana".into())))
            .when_action(EventHubAction::TogglePasswordVisibility)
            .when_action(EventHubAction::CloseAuthModal)
            .then_state(|state| {
                assert!(!state.auth_modal.open);
                assert_eq!(state.auth_modal.mode, AuthMode::Register);
                assert!(state.auth_modal.show_password);
                assert_eq!(state.register_draft.name, "Ana");
            })
            .run();
    }

    #[test]
    fn google_sign_in_is_a_placeholder() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::GoogleSignIn)
            .then_state(|state| {
                assert!(state.session.is_none());
                assert_eq!(latest(state).severity, Severity::Info);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn logout_clears_session_and_goes_home() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default().with_session(ana()))
            .when_action(EventHubAction::Navigate {
                view: View::Profile,
            })
            .when_action(EventHubAction::Logout)
            .then_state(|state| {
                assert!(state.session.is_none());
                assert_eq!(state.view, View::Home);
            })
            .run();
    }

    // ========== Navigation ==========

    #[test]
    fn select_event_enters_detail() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::SelectEvent {
                event_id: EventId::new(2),
            })
            .then_state(|state| {
                assert_eq!(state.view, View::EventDetail);
                assert_eq!(state.detail().map(|e| e.id), Some(EventId::new(2)));
            })
            .run();
    }

    #[test]
    fn unknown_selection_leaves_view_unchanged() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::SelectEvent {
                event_id: EventId::new(404),
            })
            .then_state(|state| {
                assert_eq!(state.view, View::Home);
                assert!(state.selected_event.is_none());
            })
            .run();
    }

    #[test]
    fn detail_without_selection_renders_nothing() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::Navigate {
                view: View::EventDetail,
            })
            .when_action(EventHubAction::Back)
            .when_action(EventHubAction::Navigate {
                view: View::EventDetail,
            })
            .then_state(|state| {
                assert_eq!(state.view, View::EventDetail);
                assert!(state.detail().is_none());
            })
            .run();
    }

    #[test]
    fn open_notifications_clears_unread() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default())
            .when_action(EventHubAction::GoogleSignIn)
            .when_action(EventHubAction::OpenNotifications)
            .then_state(|state| {
                assert!(!state.notifications.has_unread());
                assert_eq!(state.notifications.len(), 1);
            })
            .run();
    }

    // ========== Event creation ==========

    #[test]
    fn non_organizers_cannot_enter_create_event() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default().with_session(ana()))
            .when_action(EventHubAction::Navigate {
                view: View::CreateEvent,
            })
            .then_state(|state| {
                assert_eq!(state.view, View::Home);
                assert_eq!(latest(state).severity, Severity::Error);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn non_organizer_submit_never_reaches_the_backend() {
        let backend = Arc::new(StubBackend::new());
        let recorded = backend.clone();

        ReducerTest::new(EventHubReducer::new())
            .with_env(env_with(&backend))
            .given_state(EventHubState::default())
            .when_action(EventHubAction::EditEvent(EventEdit::Title("Expo".into())))
            .when_action(EventHubAction::SubmitEvent)
            .then_state(|state| assert_eq!(latest(state).severity, Severity::Error))
            .then_effects(move |effects| {
                assertions::assert_no_effects(effects);
                assert!(recorded.calls().is_empty());
            })
            .run();
    }

    #[test]
    fn blank_title_is_a_field_error() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default().with_session(organizer()))
            .when_action(EventHubAction::Navigate {
                view: View::CreateEvent,
            })
            .when_action(EventHubAction::SubmitEvent)
            .then_state(|state| {
                assert_eq!(state.view, View::CreateEvent);
                assert_eq!(state.event_errors.get(&EventField::Title), Some("Title is required"));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn created_event_returns_home_and_resets_draft() {
        let mut extra = serde_json::Map::new();
        extra.insert("id".into(), serde_json::json!(4));
        let backend = Arc::new(StubBackend::new().with_create_event(Ok(EventRecord {
            title: "Rust Meetup".into(),
            extra,
        })));
        let env = env_with(&backend);
        let mut state = EventHubState::default().with_session(organizer());
        state.view = View::CreateEvent;
        state.event_draft.apply(EventEdit::Title("Rust Meetup".into()));

        run_flow(&mut state, &env, EventHubAction::SubmitEvent);

        assert_eq!(state.view, View::Home);
        assert_eq!(state.event_draft, EventDraft::default());
        assert_eq!(latest(&state).message, "Event \"Rust Meetup\" created");
        assert_eq!(state.catalog.len(), 3);
    }

    #[test]
    fn failed_creation_preserves_the_draft() {
        let backend = Arc::new(StubBackend::new().with_create_event(Err(ApiError::Rejected {
            status: 500,
            message: None,
        })));
        let env = env_with(&backend);
        let mut state = EventHubState::default().with_session(organizer());
        state.view = View::CreateEvent;
        state.event_draft.apply(EventEdit::Title("Rust Meetup".into()));
        state.event_draft.apply(EventEdit::MaxCapacity(40));
        let draft = state.event_draft.clone();

        run_flow(&mut state, &env, EventHubAction::SubmitEvent);

        assert_eq!(state.view, View::CreateEvent);
        assert_eq!(state.event_draft, draft);
        assert_eq!(latest(&state).message, EVENT_CREATION_FAILED);
    }

    #[test]
    fn cancel_event_creation_discards_the_draft() {
        ReducerTest::new(EventHubReducer::new())
            .with_env(env())
            .given_state(EventHubState::default().with_session(organizer()))
            .when_action(EventHubAction::Navigate {
                view: View::CreateEvent,
            })
            .when_action(EventHubAction::EditEvent(EventEdit::Title("Draft".into())))
            .when_action(EventHubAction::CancelEventCreation)
            .then_state(|state| {
                assert_eq!(state.view, View::Home);
                assert_eq!(state.event_draft, EventDraft::default());
            })
            .run();
    }
}
