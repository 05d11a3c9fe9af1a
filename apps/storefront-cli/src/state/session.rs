//! # Session State
//!
//! Owns the customer's [`Session`] for the lifetime of the shell.
//!
//! ## Access Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Reads:   state.with_session(|s| CartResponse::from(&s.cart))          │
//! │  Writes:  state.dispatch(Action::...) → Outcome                         │
//! │                                                                         │
//! │  There is no other way to mutate the session, so every change goes    │
//! │  through the reducer and its invariants.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell loop is the only owner; no locking.

use chrono::{DateTime, Utc};
use tracing::debug;

use storefront_core::{Action, Outcome, Session};

/// The current customer session plus when it started.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Session,
    started_at: DateTime<Utc>,
}

impl SessionState {
    /// Creates an empty session starting now.
    pub fn new() -> Self {
        SessionState {
            session: Session::new(),
            started_at: Utc::now(),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        f(&self.session)
    }

    /// Applies one action through the reducer.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.session.dispatch(action);

        match outcome.rejection() {
            Some(rejection) => debug!(%rejection, "Action ignored"),
            None => debug!(status = %self.session.stage(), "Action applied"),
        }

        outcome
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
