//! Guard predicates for controlling account transitions.
//!
//! Guards are pure boolean functions over [`AccountState`] that decide
//! whether an action's effect may be applied. A failed guard never raises an
//! error; the transition simply returns the prior state.

use super::state::AccountState;
use std::fmt;

/// Named pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use bankroll::core::{AccountState, Guard};
///
/// let state = AccountState::initial();
///
/// assert!(Guard::ANY.check(&state));
/// assert!(!Guard::ACTIVE.check(&state));
/// assert!(!Guard::CLOSABLE.check(&state));
/// ```
#[derive(Clone, Copy)]
pub struct Guard {
    name: &'static str,
    predicate: fn(&AccountState) -> bool,
}

impl Guard {
    /// Always passes. Used by opening, which is not gated.
    pub const ANY: Guard = Guard::new("any", |_| true);

    /// The account is open.
    pub const ACTIVE: Guard = Guard::new("active", |s| s.is_active);

    /// The account is open and carries no outstanding loan.
    pub const LOAN_FREE: Guard = Guard::new("loan_free", AccountState::can_request_loan);

    /// The account is open with zero balance and no loan.
    pub const CLOSABLE: Guard = Guard::new("closable", AccountState::is_closable);

    /// Create a guard from a pure predicate function.
    pub const fn new(name: &'static str, predicate: fn(&AccountState) -> bool) -> Self {
        Guard { name, predicate }
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &AccountState) -> bool {
        (self.predicate)(state)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

// Guards are identified by name; function pointer equality is not reliable.
impl PartialEq for Guard {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Guard {}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guard").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(balance: i64, loan_amount: i64) -> AccountState {
        AccountState {
            balance,
            loan_amount,
            is_active: true,
            has_loan: loan_amount > 0,
            ..AccountState::initial()
        }
    }

    #[test]
    fn any_passes_everything() {
        assert!(Guard::ANY.check(&AccountState::initial()));
        assert!(Guard::ANY.check(&open(10, 10)));
    }

    #[test]
    fn active_checks_activity() {
        assert!(!Guard::ACTIVE.check(&AccountState::initial()));
        assert!(Guard::ACTIVE.check(&open(0, 0)));
        assert!(Guard::ACTIVE.check(&open(-50, 5000)));
    }

    #[test]
    fn loan_free_blocks_outstanding_loans() {
        assert!(Guard::LOAN_FREE.check(&open(500, 0)));
        assert!(!Guard::LOAN_FREE.check(&open(500, 1)));
        assert!(!Guard::LOAN_FREE.check(&AccountState::initial()));
    }

    #[test]
    fn closable_needs_empty_account() {
        assert!(Guard::CLOSABLE.check(&open(0, 0)));
        assert!(!Guard::CLOSABLE.check(&open(450, 0)));
        assert!(!Guard::CLOSABLE.check(&open(0, 5000)));
    }

    #[test]
    fn custom_guard_can_use_any_predicate() {
        let rich = Guard::new("rich", |s| s.balance >= 1_000);

        assert_eq!(rich.name(), "rich");
        assert!(rich.check(&open(1_000, 0)));
        assert!(!rich.check(&open(999, 0)));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = open(0, 0);
        assert_eq!(Guard::CLOSABLE.check(&state), Guard::CLOSABLE.check(&state));
    }

    #[test]
    fn guards_compare_by_name() {
        assert_eq!(Guard::ACTIVE, Guard::ACTIVE);
        assert_ne!(Guard::ACTIVE, Guard::CLOSABLE);
        assert_eq!(format!("{:?}", Guard::LOAN_FREE), "Guard(\"loan_free\")");
    }
}
