//! Transition history tracking.
//!
//! Provides immutable tracking of applied account transitions over time.
//! History lives in memory only.

use super::action::Action;
use super::state::AccountState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use bankroll::core::{transition, initial_state, Action, TransitionRecord};
/// use chrono::Utc;
///
/// let from = initial_state();
/// let record = TransitionRecord {
///     from,
///     to: transition(&from, Action::OpenAccount),
///     action: Action::OpenAccount,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to.balance, 500);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: AccountState,
    /// The state being transitioned to
    pub to: AccountState,
    /// The action that caused the transition
    pub action: Action,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionHistory {
    transitions: Vec<TransitionRecord>,
}

impl TransitionHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// ```rust
    /// use bankroll::core::{initial_state, Action, TransitionHistory, TransitionRecord};
    /// use chrono::Utc;
    ///
    /// let history = TransitionHistory::new();
    /// let next = history.record(TransitionRecord {
    ///     from: initial_state(),
    ///     to: initial_state(),
    ///     action: Action::OpenAccount,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(next.len(), 1);
    /// assert!(history.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first `from` state followed by the `to` state of each
    /// transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&AccountState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Actions in the order they were applied.
    pub fn actions(&self) -> Vec<Action> {
        self.transitions.iter().map(|t| t.action).collect()
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
