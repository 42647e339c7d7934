//! # EventHub Testing
//!
//! Testing utilities for EventHub reducers.
//!
//! This crate provides:
//! - A deterministic [`Clock`] for reproducible notification ids
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Effect assertions and [`resolve_effects`] for running future effects
//!   to their feedback actions without a store
//!
//! ## Example
//!
//! ```ignore
//! use eventhub_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(EventHubReducer::new())
//!     .with_env(test_environment())
//!     .given_state(EventHubState::default())
//!     .when_action(EventHubAction::SetSearch { term: "tech".into() })
//!     .then_state(|state| assert_eq!(state.visible_events().len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use eventhub_core::environment::Clock;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// # Example
    ///
    /// ```
    /// use eventhub_testing::mocks::FixedClock;
    /// use eventhub_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-11-01 09:00:00 UTC)
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which cannot happen.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-11-01T09:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions, resolve_effects};
