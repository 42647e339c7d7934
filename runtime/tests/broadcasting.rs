//! Integration tests for Store action broadcasting
//!
//! Covers the request/response pattern a client uses for backend calls:
//! send a submission, then wait for the outcome an effect feeds back.

#![allow(clippy::unwrap_used, clippy::panic)] // Test code can use unwrap/panic

use eventhub_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use eventhub_runtime::{Store, StoreError};
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum SubmitAction {
    /// Submit request `id`; even ids are accepted
    Submit { id: u64 },
    /// Intermediate hop before the outcome
    Forwarded { id: u64 },
    /// Terminal: accepted
    Accepted { id: u64 },
    /// Terminal: rejected
    Rejected { id: u64, reason: String },
}

#[derive(Debug, Clone, Default)]
struct SubmitState {
    submitted: Vec<u64>,
    accepted: Vec<u64>,
    rejected: Vec<u64>,
}

#[derive(Clone)]
struct SubmitReducer;

impl Reducer for SubmitReducer {
    type State = SubmitState;
    type Action = SubmitAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SubmitAction::Submit { id } => {
                state.submitted.push(id);
                smallvec![Effect::future(async move {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    Some(SubmitAction::Forwarded { id })
                })]
            },
            SubmitAction::Forwarded { id } => smallvec![Effect::future(async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                Some(if id % 2 == 0 {
                    SubmitAction::Accepted { id }
                } else {
                    SubmitAction::Rejected {
                        id,
                        reason: "odd id".into(),
                    }
                })
            })],
            SubmitAction::Accepted { id } => {
                state.accepted.push(id);
                SmallVec::new()
            },
            SubmitAction::Rejected { id, .. } => {
                state.rejected.push(id);
                SmallVec::new()
            },
        }
    }
}

fn store() -> Store<SubmitState, SubmitAction, (), SubmitReducer> {
    Store::new(SubmitState::default(), SubmitReducer, ())
}

fn is_outcome_for(id: u64) -> impl Fn(&SubmitAction) -> bool {
    move |action| {
        matches!(
            action,
            SubmitAction::Accepted { id: got } | SubmitAction::Rejected { id: got, .. } if *got == id
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

/// The terminal action arrives two effect hops after the submission
#[tokio::test]
async fn wait_for_outcome_across_effect_chain() {
    let store = store();

    let outcome = store
        .send_and_wait_for(
            SubmitAction::Submit { id: 2 },
            is_outcome_for(2),
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    assert_eq!(outcome, SubmitAction::Accepted { id: 2 });
}

/// Concurrent waiters each receive the outcome for their own request
#[tokio::test]
async fn concurrent_waiters_are_correlated() {
    let store = store();

    let timeout = Duration::from_secs(1);

    let (even, odd) = tokio::join!(
        store.send_and_wait_for(SubmitAction::Submit { id: 4 }, is_outcome_for(4), timeout),
        store.send_and_wait_for(SubmitAction::Submit { id: 7 }, is_outcome_for(7), timeout),
    );

    assert_eq!(even.unwrap(), SubmitAction::Accepted { id: 4 });
    match odd.unwrap() {
        SubmitAction::Rejected { id, reason } => {
            assert_eq!(id, 7);
            assert_eq!(reason, "odd id");
        },
        other => panic!("expected rejection, got {other:?}"),
    }
}

/// Subscribers see every effect-produced action in order
#[tokio::test]
async fn subscriber_sees_intermediate_and_terminal_actions() {
    let store = store();
    let mut rx = store.subscribe_actions();

    store.send(SubmitAction::Submit { id: 6 }).await.unwrap();

    let timeout = Duration::from_secs(1);
    let first = tokio::time::timeout(timeout, rx.recv()).await.unwrap().unwrap();
    let second = tokio::time::timeout(timeout, rx.recv()).await.unwrap().unwrap();

    assert_eq!(first, SubmitAction::Forwarded { id: 6 });
    assert_eq!(second, SubmitAction::Accepted { id: 6 });
}

/// A predicate that never matches times out instead of hanging
#[tokio::test]
async fn wait_for_unmatched_outcome_times_out() {
    let store = store();

    let result = store
        .send_and_wait_for(
            SubmitAction::Submit { id: 8 },
            |action| matches!(action, SubmitAction::Rejected { .. }),
            Duration::from_millis(100),
        )
        .await;

    assert_eq!(result, Err(StoreError::Timeout));
    // The accepted outcome still reached the reducer
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(store.state(|s| s.accepted.clone()).await, vec![8]);
}

/// Shutdown waits for running effects, then rejects new actions
#[tokio::test]
async fn shutdown_waits_for_running_effects() {
    let store = store();
    store.send(SubmitAction::Submit { id: 10 }).await.unwrap();

    store.shutdown(Duration::from_secs(1)).await.unwrap();

    assert_eq!(store.state(|s| s.submitted.clone()).await, vec![10]);
    assert!(matches!(
        store.send(SubmitAction::Submit { id: 12 }).await,
        Err(StoreError::ShutdownInProgress)
    ));
}
