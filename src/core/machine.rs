//! The account transition function.
//!
//! Everything here is pure: no I/O, no logging, no interior mutability.
//! A transition either fully applies an action's effect or hands back the
//! prior state untouched.

use super::action::{Action, RawAction};
use super::error::TransitionError;
use super::state::AccountState;
use crate::config::AccountConfig;

/// Pure state machine for a single account.
///
/// Holds only configuration; the state itself is passed in and returned by
/// value so callers decide where "the current state" lives.
///
/// # Example
///
/// ```rust
/// use bankroll::core::{Action, AccountMachine};
/// use bankroll::config::AccountConfig;
///
/// let machine = AccountMachine::new(AccountConfig::default().with_min_deposit(100));
///
/// let state = machine.transition(&machine.initial_state(), Action::OpenAccount);
/// assert_eq!(state.balance, 100);
/// assert!(state.is_active);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccountMachine {
    config: AccountConfig,
}

impl AccountMachine {
    pub fn new(config: AccountConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    /// The fixed starting value for this machine.
    pub fn initial_state(&self) -> AccountState {
        AccountState::initial_with(&self.config)
    }

    /// Compute the next state from a prior state and an action.
    ///
    /// Unmet preconditions are not errors: the prior state is returned
    /// unchanged. Arithmetic that would overflow is treated the same way.
    pub fn transition(&self, state: &AccountState, action: Action) -> AccountState {
        // Every action but opening is a no-op on an inactive account.
        if !state.is_active && action != Action::OpenAccount {
            return *state;
        }

        if !action.guard().check(state) {
            return *state;
        }

        self.apply(state, action).unwrap_or(*state)
    }

    /// Decode a raw action and transition on it.
    ///
    /// Decoding happens before the inactive gate, so an unknown action kind
    /// fails for every state.
    pub fn dispatch(
        &self,
        state: &AccountState,
        raw: &RawAction,
    ) -> Result<AccountState, TransitionError> {
        let action = Action::try_from(raw)?;
        Ok(self.transition(state, action))
    }

    fn apply(&self, state: &AccountState, action: Action) -> Option<AccountState> {
        let next = match action {
            Action::OpenAccount => AccountState {
                balance: self.config.min_deposit,
                is_active: true,
                ..*state
            },
            Action::Deposit => AccountState {
                balance: state.balance.checked_add(state.pending_deposit_amount)?,
                ..*state
            },
            Action::ChangeDepositAmount(amount) => AccountState {
                pending_deposit_amount: amount,
                ..*state
            },
            Action::Withdraw => AccountState {
                balance: state.balance.checked_sub(state.pending_withdraw_amount)?,
                ..*state
            },
            Action::ChangeWithdrawAmount(amount) => AccountState {
                pending_withdraw_amount: amount,
                ..*state
            },
            Action::RequestLoan => {
                let amount = state.pending_loan_request_amount;
                // A non-positive loan would raise the flag without principal.
                if amount <= 0 {
                    return None;
                }
                AccountState {
                    balance: state.balance.checked_add(amount)?,
                    loan_amount: state.loan_amount.checked_add(amount)?,
                    has_loan: true,
                    ..*state
                }
            }
            Action::ChangeLoanRequestAmount(amount) => AccountState {
                pending_loan_request_amount: amount,
                ..*state
            },
            Action::PayLoan => AccountState {
                balance: state.balance.checked_sub(state.loan_amount)?,
                loan_amount: 0,
                has_loan: false,
                ..*state
            },
            Action::CloseAccount => self.initial_state(),
        };
        Some(next)
    }
}

/// The starting value: inactive, zero balance, default pending amounts.
pub fn initial_state() -> AccountState {
    AccountMachine::default().initial_state()
}

/// Transition with the default configuration.
///
/// # Example
///
/// ```rust
/// use bankroll::core::{initial_state, transition, Action};
///
/// let state = transition(&initial_state(), Action::OpenAccount);
/// let state = transition(&state, Action::Deposit);
/// assert_eq!(state.balance, 650);
/// ```
pub fn transition(state: &AccountState, action: Action) -> AccountState {
    AccountMachine::default().transition(state, action)
}

/// Decode and transition with the default configuration.
pub fn dispatch(state: &AccountState, raw: &RawAction) -> Result<AccountState, TransitionError> {
    AccountMachine::default().dispatch(state, raw)
}
