//! Bankroll: a pure functional bank account state machine
//!
//! Bankroll follows the "pure core, imperative shell" split. The core is a
//! single transition function mapping a prior account state and an action
//! to the next state. It enforces three business rules:
//!
//! - every action except opening is ignored while the account is inactive
//! - only one loan may be outstanding at a time
//! - an account closes only when it is active, loan-free, and at zero
//!
//! Rule violations are not errors; they return the prior state unchanged.
//! The only error the core raises is for an action kind it does not know.
//!
//! # Core Concepts
//!
//! - **State**: the immutable `AccountState` value
//! - **Actions**: the closed `Action` set, decoded from `RawAction`
//! - **Guards**: pure predicates gating each action
//! - **Session**: the shell owning the current state and its history
//!
//! # Example
//!
//! ```rust
//! use bankroll::core::{initial_state, transition, Action};
//!
//! let state = transition(&initial_state(), Action::OpenAccount);
//! let state = transition(&state, Action::RequestLoan);
//! assert_eq!(state.balance, 5500);
//! assert!(state.has_loan);
//!
//! // A second loan is refused without error.
//! assert_eq!(transition(&state, Action::RequestLoan), state);
//!
//! let state = transition(&state, Action::PayLoan);
//! assert_eq!(state.balance, 500);
//! assert!(!state.has_loan);
//! ```

pub mod config;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use config::AccountConfig;
pub use self::core::{
    dispatch, initial_state, transition, AccountMachine, AccountState, Action, Guard, RawAction,
    TransitionError,
};
pub use session::{AccountSession, Outcome, SessionError};
