//! End-to-end walks through an account's life.

use bankroll::core::{initial_state, transition, AccountState, Action};
use bankroll::session::{AccountSession, Outcome};

fn summary(state: &AccountState) -> (i64, i64, bool, bool) {
    (state.balance, state.loan_amount, state.has_loan, state.is_active)
}

#[test]
fn loan_then_payoff_then_refused_close() {
    let steps = [
        (Action::OpenAccount, (500, 0, false, true)),
        (Action::Deposit, (650, 0, false, true)),
        (Action::RequestLoan, (5650, 5000, true, true)),
        (Action::Withdraw, (5600, 5000, true, true)),
        (Action::PayLoan, (600, 0, false, true)),
        (Action::Withdraw, (550, 0, false, true)),
        (Action::Withdraw, (500, 0, false, true)),
        (Action::Withdraw, (450, 0, false, true)),
        (Action::CloseAccount, (450, 0, false, true)),
    ];

    let mut state = initial_state();
    for (action, expected) in steps {
        state = transition(&state, action);
        assert_eq!(summary(&state), expected, "after {action:?}");
    }
}

#[test]
fn full_lifecycle_through_session() {
    let mut session = AccountSession::new();

    session.apply(Action::OpenAccount);
    session.apply(Action::RequestLoan);
    assert_eq!(session.apply(Action::RequestLoan), Outcome::Unchanged);
    session.apply(Action::PayLoan);
    assert_eq!(session.state().balance, 500);

    // Not closable yet.
    assert_eq!(session.apply(Action::CloseAccount), Outcome::Unchanged);

    session.apply(Action::ChangeWithdrawAmount(500));
    session.apply(Action::Withdraw);
    assert!(session.is_closable());

    assert_eq!(
        session.apply(Action::CloseAccount),
        Outcome::Changed(initial_state())
    );

    // Closed again: only opening does anything.
    assert_eq!(session.apply(Action::Deposit), Outcome::Unchanged);
    assert!(session.apply(Action::OpenAccount).is_changed());

    let balances: Vec<i64> = session
        .history()
        .get_path()
        .iter()
        .map(|s| s.balance)
        .collect();
    assert_eq!(balances, vec![0, 500, 5500, 500, 500, 0, 0, 500]);
}

#[test]
fn negative_balance_blocks_close() {
    let mut session = AccountSession::new();

    session.apply(Action::OpenAccount);
    session.apply(Action::RequestLoan);
    session.apply(Action::ChangeWithdrawAmount(5_500));
    session.apply(Action::Withdraw);
    session.apply(Action::PayLoan);

    assert_eq!(session.state().balance, -5_000);
    assert!(!session.state().has_loan);
    assert_eq!(session.apply(Action::CloseAccount), Outcome::Unchanged);
}
