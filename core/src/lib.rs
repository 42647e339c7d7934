//! # EventHub Core
//!
//! The small set of abstractions every EventHub feature is written against.
//!
//! A feature is a pure function over its view model:
//!
//! - **State**: everything a renderer needs (current view, drafts, filters, session)
//! - **Action**: every input, both user intents and results fed back by effects
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: a description of work to run outside the reducer (HTTP calls)
//! - **Environment**: injected dependencies (clock, backend)
//!
//! The runtime that drives reducers and executes effects lives in
//! `eventhub-runtime`.
//!
//! ## Example
//!
//! ```ignore
//! use eventhub_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! impl Reducer for FilterReducer {
//!     type State = FilterState;
//!     type Action = FilterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut FilterState,
//!         action: FilterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<FilterAction>; 4]> {
//!         match action {
//!             FilterAction::SetSearch { term } => state.search = term,
//!         }
//!         SmallVec::new()
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, NaiveDate, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - the core trait for view-model logic
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - all state transitions go through here
    ///
    /// A reducer validates an action, updates state in place, and returns
    /// descriptions of the side effects that should follow. It never performs
    /// I/O itself, which keeps every transition testable without a runtime.
    ///
    /// Most actions produce no effects, so the return type is a `SmallVec`
    /// that stays on the stack for up to four effects.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects are values. The store executes them after the reducer returns and
/// feeds any resulting action back through the reducer.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Boxed future produced by an [`Effect::Future`]
    pub type EffectFuture<Action> = Pin<Box<dyn Future<Output = Option<Action>> + Send>>;

    /// Effect type - describes a side effect to be executed
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// If the future resolves to `Some(action)`, the action is fed back
        /// into the reducer.
        Future(EffectFuture<Action>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Wrap an async block as an effect
        #[must_use]
        pub fn future<F>(fut: F) -> Self
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }

        /// Returns true if this effect does nothing when executed
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - dependency injection traits
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// Notification ids are creation timestamps, so reducers read time
    /// through this trait rather than calling `Utc::now()` directly.
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Wall-clock implementation of [`Clock`]
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
