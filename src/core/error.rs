//! Errors raised while turning a raw request into an account transition.

use thiserror::Error;

/// Programmer errors surfaced by the transition entry points.
///
/// Business-rule violations are never reported here; they leave the state
/// unchanged instead.
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Unrecognized action '{kind}'")]
    UnrecognizedAction { kind: String },

    #[error("Action '{kind}' requires an integer payload")]
    MissingPayload { kind: String },

    #[error("Action could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
