//! Imperative shell around the pure account core.
//!
//! An [`AccountSession`] owns "the current state" and is the single writer
//! that replaces it after each transition. Every mutating method takes
//! `&mut self`, so two transitions can never observe the same prior state.
//! Logging happens here, never in the core.

use crate::config::AccountConfig;
use crate::core::{
    violations, AccountMachine, AccountState, Action, RawAction, TransitionHistory,
    TransitionRecord,
};
use chrono::Utc;
use tracing::{debug, warn};

pub mod error;

pub use error::SessionError;

/// Result of applying one action to a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The state was replaced with a new value
    Changed(AccountState),

    /// The action left the state as it was
    Unchanged,
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// Owner of the current account state.
///
/// # Example
///
/// ```rust
/// use bankroll::core::Action;
/// use bankroll::session::{AccountSession, Outcome};
///
/// let mut session = AccountSession::new();
///
/// assert!(session.apply(Action::OpenAccount).is_changed());
/// assert_eq!(session.apply(Action::CloseAccount), Outcome::Unchanged);
/// assert_eq!(session.state().balance, 500);
/// ```
#[derive(Clone, Debug)]
pub struct AccountSession {
    machine: AccountMachine,
    current: AccountState,
    history: TransitionHistory,
}

impl AccountSession {
    /// Start a session in the default initial state.
    pub fn new() -> Self {
        Self::with_config(AccountConfig::default())
    }

    /// Start a session in the initial state for `config`.
    pub fn with_config(config: AccountConfig) -> Self {
        let machine = AccountMachine::new(config);
        Self {
            machine,
            current: machine.initial_state(),
            history: TransitionHistory::new(),
        }
    }

    /// Adopt an existing state, rejecting it if it breaks an invariant.
    pub fn resume(state: AccountState) -> Result<Self, SessionError> {
        Self::resume_with(AccountConfig::default(), state)
    }

    /// Adopt an existing state under a given configuration.
    pub fn resume_with(config: AccountConfig, state: AccountState) -> Result<Self, SessionError> {
        let found = violations(&state);
        if !found.is_empty() {
            warn!(violations = found.len(), "refusing to resume invalid account state");
            return Err(SessionError::InvalidState { violations: found });
        }

        Ok(Self {
            machine: AccountMachine::new(config),
            current: state,
            history: TransitionHistory::new(),
        })
    }

    /// Get current state (pure)
    pub fn state(&self) -> &AccountState {
        &self.current
    }

    pub fn machine(&self) -> &AccountMachine {
        &self.machine
    }

    /// Applied transitions since the session started.
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Whether closing would succeed right now.
    pub fn is_closable(&self) -> bool {
        self.current.is_closable()
    }

    /// Apply a typed action and replace the current state.
    pub fn apply(&mut self, action: Action) -> Outcome {
        let from = self.current;
        let next = self.machine.transition(&from, action);

        if next == from {
            debug!(
                action = action.kind(),
                state = from.name(),
                balance = from.balance,
                "action left account unchanged"
            );
            return Outcome::Unchanged;
        }

        debug!(
            action = action.kind(),
            from = from.name(),
            to = next.name(),
            balance = next.balance,
            loan = next.loan_amount,
            "account transitioned"
        );

        self.history = self.history.record(TransitionRecord {
            from,
            to: next,
            action,
            timestamp: Utc::now(),
        });
        self.current = next;
        Outcome::Changed(next)
    }

    /// Decode a raw action and apply it.
    ///
    /// Unknown action kinds propagate as errors and leave the session
    /// untouched.
    pub fn dispatch(&mut self, raw: &RawAction) -> Result<Outcome, SessionError> {
        let action = Action::try_from(raw).inspect_err(|err| {
            warn!(kind = %raw.kind, error = %err, "rejected raw action");
        })?;
        Ok(self.apply(action))
    }
}

impl Default for AccountSession {
    fn default() -> Self {
        Self::new()
    }
}
