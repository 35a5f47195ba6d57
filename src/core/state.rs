//! Account state value.
//!
//! `AccountState` is an immutable snapshot. Transitions never mutate a
//! state in place; they return a new value that replaces the old one.

use crate::config::AccountConfig;
use serde::{Deserialize, Serialize};

/// Snapshot of the single bank account.
///
/// The three `pending_*` fields are user-adjustable default amounts used by
/// the deposit, withdraw, and loan request actions. They are independent of
/// whether the account is active.
///
/// # Example
///
/// ```rust
/// use bankroll::core::AccountState;
///
/// let state = AccountState::initial();
///
/// assert!(!state.is_active);
/// assert_eq!(state.balance, 0);
/// assert_eq!(state.pending_deposit_amount, 150);
/// assert_eq!(state.name(), "Inactive");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountState {
    /// Current balance, may go negative after a withdrawal or loan payoff
    pub balance: i64,
    /// Outstanding loan principal
    pub loan_amount: i64,
    /// Whether the account exists and accepts operations
    pub is_active: bool,
    /// Cached `loan_amount > 0`
    pub has_loan: bool,
    /// Amount added by the next deposit
    pub pending_deposit_amount: i64,
    /// Amount removed by the next withdrawal
    pub pending_withdraw_amount: i64,
    /// Principal of the next loan request
    pub pending_loan_request_amount: i64,
}

impl AccountState {
    /// The starting value built from the default configuration.
    pub fn initial() -> Self {
        Self::initial_with(&AccountConfig::default())
    }

    /// The starting value for a given configuration.
    pub fn initial_with(config: &AccountConfig) -> Self {
        Self {
            balance: 0,
            loan_amount: 0,
            is_active: false,
            has_loan: false,
            pending_deposit_amount: config.deposit_amount,
            pending_withdraw_amount: config.withdraw_amount,
            pending_loan_request_amount: config.loan_request_amount,
        }
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match (self.is_active, self.has_loan) {
            (false, _) => "Inactive",
            (true, false) => "Active",
            (true, true) => "ActiveWithLoan",
        }
    }

    /// Whether the account may be closed right now.
    ///
    /// An account is closable when it is active, carries no loan, and its
    /// balance is exactly zero.
    pub fn is_closable(&self) -> bool {
        self.is_active && self.balance == 0 && self.loan_amount == 0
    }

    /// Whether a loan request would be honored.
    pub fn can_request_loan(&self) -> bool {
        self.is_active && !self.has_loan
    }
}

impl Default for AccountState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(balance: i64, loan_amount: i64) -> AccountState {
        AccountState {
            balance,
            loan_amount,
            is_active: true,
            has_loan: loan_amount > 0,
            ..AccountState::initial()
        }
    }

    #[test]
    fn initial_state_has_fixed_values() {
        let state = AccountState::initial();

        assert_eq!(state.balance, 0);
        assert_eq!(state.loan_amount, 0);
        assert!(!state.is_active);
        assert!(!state.has_loan);
        assert_eq!(state.pending_deposit_amount, 150);
        assert_eq!(state.pending_withdraw_amount, 50);
        assert_eq!(state.pending_loan_request_amount, 5000);
    }

    #[test]
    fn initial_with_uses_config_amounts() {
        let config = AccountConfig::default()
            .with_deposit_amount(10)
            .with_withdraw_amount(20)
            .with_loan_request_amount(30);

        let state = AccountState::initial_with(&config);

        assert_eq!(state.pending_deposit_amount, 10);
        assert_eq!(state.pending_withdraw_amount, 20);
        assert_eq!(state.pending_loan_request_amount, 30);
        assert!(!state.is_active);
    }

    #[test]
    fn name_reflects_activity_and_loan() {
        assert_eq!(AccountState::initial().name(), "Inactive");
        assert_eq!(active(500, 0).name(), "Active");
        assert_eq!(active(500, 100).name(), "ActiveWithLoan");
    }

    #[test]
    fn closable_requires_zero_balance_and_no_loan() {
        assert!(active(0, 0).is_closable());
        assert!(!active(1, 0).is_closable());
        assert!(!active(-1, 0).is_closable());
        assert!(!active(0, 10).is_closable());
        assert!(!AccountState::initial().is_closable());
    }

    #[test]
    fn loan_request_needs_active_account_without_loan() {
        assert!(active(0, 0).can_request_loan());
        assert!(!active(0, 10).can_request_loan());
        assert!(!AccountState::initial().can_request_loan());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = active(650, 0);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: AccountState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
