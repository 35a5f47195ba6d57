//! Session error types.

use crate::core::{InvariantViolation, TransitionError};
use thiserror::Error;

/// Errors that can occur while driving an account session
#[derive(Debug, Error)]
pub enum SessionError {
    /// The action could not be turned into a transition
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// A supplied state breaks one or more invariants
    #[error("Invalid account state: {} invariant violation(s)", .violations.len())]
    InvalidState { violations: Vec<InvariantViolation> },
}
