//! Dependencies injected into the reducer.

use eventhub_client::{
    ApiError, AuthResponse, CreateEventRequest, EventHubClient, EventRecord, LoginRequest,
    RegisterRequest,
};
use eventhub_core::environment::Clock;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};

/// Boxed future returned by [`Backend`] calls
pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'a>>;

/// The three backend calls the client makes
///
/// Object-safe so the environment can hold an `Arc<dyn Backend>` and tests can
/// swap in [`StubBackend`].
pub trait Backend: Send + Sync {
    /// `POST /api/auth/login`
    fn login(&self, request: LoginRequest) -> BackendFuture<'_, AuthResponse>;

    /// `POST /api/auth/register`
    fn register(&self, request: RegisterRequest) -> BackendFuture<'_, AuthResponse>;

    /// `POST /api/events`
    fn create_event(&self, request: CreateEventRequest) -> BackendFuture<'_, EventRecord>;
}

/// [`Backend`] over HTTP
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: EventHubClient,
}

impl HttpBackend {
    /// Wrap a configured client
    #[must_use]
    pub const fn new(client: EventHubClient) -> Self {
        Self { client }
    }
}

impl Backend for HttpBackend {
    fn login(&self, request: LoginRequest) -> BackendFuture<'_, AuthResponse> {
        Box::pin(async move { self.client.login(&request).await })
    }

    fn register(&self, request: RegisterRequest) -> BackendFuture<'_, AuthResponse> {
        Box::pin(async move { self.client.register(&request).await })
    }

    fn create_event(&self, request: CreateEventRequest) -> BackendFuture<'_, EventRecord> {
        Box::pin(async move { self.client.create_event(&request).await })
    }
}

/// A request received by [`StubBackend`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendCall {
    /// Login attempt
    Login(LoginRequest),
    /// Account registration
    Register(RegisterRequest),
    /// Event creation
    CreateEvent(CreateEventRequest),
}

#[derive(Debug, Default)]
struct StubState {
    login: Option<Result<AuthResponse, ApiError>>,
    register: Option<Result<AuthResponse, ApiError>>,
    create_event: Option<Result<EventRecord, ApiError>>,
    calls: Vec<BackendCall>,
}

/// Scripted in-memory [`Backend`] that records every request
///
/// Each endpoint answers with its configured result on every call. An
/// endpoint with nothing configured fails as if the server were unreachable.
#[derive(Debug, Default)]
pub struct StubBackend {
    state: Mutex<StubState>,
}

impl StubBackend {
    /// Stub with no scripted answers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer logins with `result`
    #[must_use]
    pub fn with_login(self, result: Result<AuthResponse, ApiError>) -> Self {
        self.lock().login = Some(result);
        self
    }

    /// Answer registrations with `result`
    #[must_use]
    pub fn with_register(self, result: Result<AuthResponse, ApiError>) -> Self {
        self.lock().register = Some(result);
        self
    }

    /// Answer event creation with `result`
    #[must_use]
    pub fn with_create_event(self, result: Result<EventRecord, ApiError>) -> Self {
        self.lock().create_event = Some(result);
        self
    }

    /// Requests received so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<BackendCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn answer<T>(
        &self,
        call: BackendCall,
        pick: impl FnOnce(&StubState) -> Option<Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        let mut state = self.lock();
        state.calls.push(call);
        pick(&state)
            .unwrap_or_else(|| Err(ApiError::RequestFailed("no stubbed response".to_string())))
    }
}

impl Backend for StubBackend {
    fn login(&self, request: LoginRequest) -> BackendFuture<'_, AuthResponse> {
        let result = self.answer(BackendCall::Login(request), |s| s.login.clone());
        Box::pin(async move { result })
    }

    fn register(&self, request: RegisterRequest) -> BackendFuture<'_, AuthResponse> {
        let result = self.answer(BackendCall::Register(request), |s| s.register.clone());
        Box::pin(async move { result })
    }

    fn create_event(&self, request: CreateEventRequest) -> BackendFuture<'_, EventRecord> {
        let result = self.answer(BackendCall::CreateEvent(request), |s| s.create_event.clone());
        Box::pin(async move { result })
    }
}

/// Environment for [`EventHubReducer`](crate::reducer::EventHubReducer)
#[derive(Clone)]
pub struct EventHubEnvironment {
    /// Clock for notification timestamps
    pub clock: Arc<dyn Clock>,
    /// Backend for auth and event creation
    pub backend: Arc<dyn Backend>,
}

impl EventHubEnvironment {
    /// Creates a new `EventHubEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, backend: Arc<dyn Backend>) -> Self {
        Self { clock, backend }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use eventhub_client::{Role, UserRecord};

    fn login_request() -> LoginRequest {
        LoginRequest {
            name: None,
            email: "ana@example.com".into(),
            password: "secret1".into(),
        }
    }

    #[tokio::test]
    async fn stub_answers_with_scripted_result_and_records_call() {
        let user = UserRecord {
            id: "1".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            role: Role::User,
            registered_events: vec![],
        };
        let stub = StubBackend::new().with_login(Ok(AuthResponse { user: user.clone() }));

        let response = stub.login(login_request()).await.unwrap();
        assert_eq!(response.user, user);
        assert_eq!(stub.calls(), vec![BackendCall::Login(login_request())]);
    }

    #[tokio::test]
    async fn unscripted_endpoint_fails_like_a_dead_server() {
        let stub = StubBackend::new();
        let error = stub.login(login_request()).await.unwrap_err();
        assert!(matches!(error, ApiError::RequestFailed(_)));
        assert_eq!(stub.calls().len(), 1);
    }
}
