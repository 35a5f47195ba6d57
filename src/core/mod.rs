//! Core account state machine types and logic.
//!
//! This module contains the pure functional core:
//! - The `AccountState` value and its invariants
//! - The closed `Action` set and raw action decoding
//! - Guard predicates for transition control
//! - The transition function itself
//! - Immutable history tracking
//!
//! Nothing in this module performs I/O or logs.

mod action;
mod error;
mod guard;
mod history;
mod invariants;
mod machine;
mod state;

pub use action::{Action, RawAction};
pub use error::TransitionError;
pub use guard::Guard;
pub use history::{TransitionHistory, TransitionRecord};
pub use invariants::{check_invariants, violations, InvariantViolation};
pub use machine::{dispatch, initial_state, transition, AccountMachine};
pub use state::AccountState;
