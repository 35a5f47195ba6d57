//! Constants that parameterize the account state machine.

use serde::{Deserialize, Serialize};

/// Minimum deposit required to open an account.
pub const MIN_DEPOSIT: i64 = 500;

/// Default amount added by a deposit.
pub const DEFAULT_DEPOSIT_AMOUNT: i64 = 150;

/// Default amount removed by a withdrawal.
pub const DEFAULT_WITHDRAW_AMOUNT: i64 = 50;

/// Default principal of a loan request.
pub const DEFAULT_LOAN_REQUEST_AMOUNT: i64 = 5000;

/// Machine configuration.
///
/// The default reproduces the fixed constants above. Missing fields fall
/// back to those defaults when deserializing.
///
/// # Example
///
/// ```rust
/// use bankroll::config::AccountConfig;
///
/// let config = AccountConfig::default()
///     .with_min_deposit(1_000)
///     .with_deposit_amount(250);
///
/// assert_eq!(config.min_deposit, 1_000);
/// assert_eq!(config.deposit_amount, 250);
/// assert_eq!(config.withdraw_amount, 50);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Balance an account starts with when opened
    pub min_deposit: i64,
    /// Initial pending deposit amount
    pub deposit_amount: i64,
    /// Initial pending withdrawal amount
    pub withdraw_amount: i64,
    /// Initial pending loan request amount
    pub loan_request_amount: i64,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            min_deposit: MIN_DEPOSIT,
            deposit_amount: DEFAULT_DEPOSIT_AMOUNT,
            withdraw_amount: DEFAULT_WITHDRAW_AMOUNT,
            loan_request_amount: DEFAULT_LOAN_REQUEST_AMOUNT,
        }
    }
}

impl AccountConfig {
    /// Set the opening balance.
    pub fn with_min_deposit(mut self, amount: i64) -> Self {
        self.min_deposit = amount;
        self
    }

    /// Set the initial pending deposit amount.
    pub fn with_deposit_amount(mut self, amount: i64) -> Self {
        self.deposit_amount = amount;
        self
    }

    /// Set the initial pending withdrawal amount.
    pub fn with_withdraw_amount(mut self, amount: i64) -> Self {
        self.withdraw_amount = amount;
        self
    }

    /// Set the initial pending loan request amount.
    pub fn with_loan_request_amount(mut self, amount: i64) -> Self {
        self.loan_request_amount = amount;
        self
    }
}
