//! At-most-once guard around bootstrap seeding.
//!
//! The first caller starts a shared attempt; callers arriving while it runs
//! await the same attempt and get the same outcome. A successful attempt
//! closes the gate for good. A failed attempt reopens it so a later call can
//! retry.
//!
//! The attempt runs on its own task, so it finishes even when every caller
//! drops its future mid-way. The next caller then picks up the finished
//! outcome instead of waiting on an attempt nobody is polling.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};

type SeedOutcome = Result<(), Arc<sqlx::Error>>;
type SeedAttempt = Shared<BoxFuture<'static, SeedOutcome>>;

enum SeedState {
    Unstarted,
    InProgress(SeedAttempt),
    Done,
}

pub(crate) struct SeedGate {
    state: Mutex<SeedState>,
}

impl SeedGate {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(SeedState::Unstarted),
        }
    }

    /// Run `seed` unless a previous attempt already succeeded.
    ///
    /// `seed` is only invoked when no attempt is running or done.
    pub(crate) async fn run<F>(&self, seed: F) -> SeedOutcome
    where
        F: FnOnce() -> BoxFuture<'static, Result<(), sqlx::Error>>,
    {
        let attempt = {
            let mut state = self.lock();
            match &*state {
                SeedState::Done => return Ok(()),
                SeedState::InProgress(attempt) => attempt.clone(),
                SeedState::Unstarted => {
                    let attempt = spawn_attempt(seed());
                    *state = SeedState::InProgress(attempt.clone());
                    attempt
                }
            }
        };

        let outcome = attempt.clone().await;

        let mut state = self.lock();
        if let SeedState::InProgress(current) = &*state {
            if current.ptr_eq(&attempt) {
                *state = if outcome.is_ok() {
                    SeedState::Done
                } else {
                    SeedState::Unstarted
                };
            }
        }

        outcome
    }

    pub(crate) fn is_done(&self) -> bool {
        matches!(*self.lock(), SeedState::Done)
    }

    // The state is a plain enum, so a poisoned lock still holds a valid value.
    fn lock(&self) -> MutexGuard<'_, SeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn spawn_attempt(seed: BoxFuture<'static, Result<(), sqlx::Error>>) -> SeedAttempt {
    tokio::spawn(seed)
        .map(|joined| match joined {
            Ok(outcome) => outcome.map_err(Arc::new),
            Err(e) => {
                tracing::error!(error = %e, "Seed task did not complete");
                Err(Arc::new(sqlx::Error::WorkerCrashed))
            }
        })
        .boxed()
        .shared()
}
