//! Structural invariants of an account state.
//!
//! Checks use Stillwater's `Validation` so that every broken invariant is
//! reported in one pass rather than stopping at the first.

use super::state::AccountState;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single broken invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Inactive account holds a balance of {balance}")]
    InactiveWithBalance { balance: i64 },

    #[error("Inactive account holds a loan of {loan_amount}")]
    InactiveWithLoan { loan_amount: i64 },

    #[error("Loan amount {loan_amount} is negative")]
    NegativeLoan { loan_amount: i64 },

    #[error("Loan flag is {has_loan} but loan amount is {loan_amount}")]
    LoanFlagMismatch { has_loan: bool, loan_amount: i64 },
}

/// Check every invariant, accumulating ALL violations.
///
/// # Example
///
/// ```rust
/// use bankroll::core::{check_invariants, AccountState};
///
/// assert!(check_invariants(&AccountState::initial()).is_success());
///
/// let broken = AccountState { balance: 10, ..AccountState::initial() };
/// assert!(check_invariants(&broken).is_failure());
/// ```
pub fn check_invariants(state: &AccountState) -> Validation<(), NonEmptyVec<InvariantViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<InvariantViolation>>> = Vec::new();

    if !state.is_active {
        checks.push(ensure(
            state.balance == 0,
            InvariantViolation::InactiveWithBalance {
                balance: state.balance,
            },
        ));
        checks.push(ensure(
            state.loan_amount == 0 && !state.has_loan,
            InvariantViolation::InactiveWithLoan {
                loan_amount: state.loan_amount,
            },
        ));
    }

    checks.push(ensure(
        state.loan_amount >= 0,
        InvariantViolation::NegativeLoan {
            loan_amount: state.loan_amount,
        },
    ));

    checks.push(ensure(
        state.has_loan == (state.loan_amount > 0),
        InvariantViolation::LoanFlagMismatch {
            has_loan: state.has_loan,
            loan_amount: state.loan_amount,
        },
    ));

    Validation::all_vec(checks).map(|_| ())
}

/// Collect the violations of a state into a plain vector.
///
/// Empty when the state is valid.
pub fn violations(state: &AccountState) -> Vec<InvariantViolation> {
    match check_invariants(state) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

fn ensure(
    holds: bool,
    violation: InvariantViolation,
) -> Validation<(), NonEmptyVec<InvariantViolation>> {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_valid() {
        assert!(check_invariants(&AccountState::initial()).is_success());
        assert!(violations(&AccountState::initial()).is_empty());
    }

    #[test]
    fn active_negative_balance_is_valid() {
        let state = AccountState {
            balance: -4_400,
            is_active: true,
            ..AccountState::initial()
        };

        assert!(check_invariants(&state).is_success());
    }

    #[test]
    fn accumulates_all_violations() {
        let state = AccountState {
            balance: 100,
            loan_amount: 50,
            has_loan: false,
            is_active: false,
            ..AccountState::initial()
        };

        let result = check_invariants(&state);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::InactiveWithBalance { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::InactiveWithLoan { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::LoanFlagMismatch { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn loan_flag_without_principal_is_flagged() {
        let state = AccountState {
            is_active: true,
            has_loan: true,
            loan_amount: 0,
            ..AccountState::initial()
        };

        assert_eq!(
            violations(&state),
            vec![InvariantViolation::LoanFlagMismatch {
                has_loan: true,
                loan_amount: 0,
            }]
        );
    }

    #[test]
    fn negative_loan_is_flagged() {
        let state = AccountState {
            is_active: true,
            loan_amount: -1,
            ..AccountState::initial()
        };

        assert_eq!(
            violations(&state),
            vec![InvariantViolation::NegativeLoan { loan_amount: -1 }]
        );
    }
}
