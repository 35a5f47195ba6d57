//! Bank Teller
//!
//! This example drives an account session with raw JSON actions, the way a
//! presentation layer would.
//!
//! Key concepts:
//! - Raw actions decoded at the boundary
//! - Business-rule violations are silent no-ops
//! - Unknown actions surface as errors
//! - Closability predicate for enabling the close button
//!
//! Run with: RUST_LOG=bankroll=debug cargo run --example bank_teller

use bankroll::core::RawAction;
use bankroll::session::{AccountSession, Outcome};
use tracing_subscriber::EnvFilter;

const SCRIPT: &[&str] = &[
    r#"{"type":"openAccount"}"#,
    r#"{"type":"deposit"}"#,
    r#"{"type":"requestLoan"}"#,
    r#"{"type":"requestLoan"}"#,
    r#"{"type":"withdraw"}"#,
    r#"{"type":"payLoan"}"#,
    r#"{"type":"changeWithdrawAmount","payload":600}"#,
    r#"{"type":"withdraw"}"#,
    r#"{"type":"transferFunds"}"#,
    r#"{"type":"closeAccount"}"#,
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bank Teller Example ===\n");

    let mut session = AccountSession::new();

    for line in SCRIPT {
        let raw = match RawAction::from_json(line) {
            Ok(raw) => raw,
            Err(err) => {
                println!("  ✗ {line}: {err}");
                continue;
            }
        };

        match session.dispatch(&raw) {
            Ok(Outcome::Changed(state)) => println!(
                "  ✓ {:<22} balance: {:>6}  loan: {:>5}  closable: {}",
                raw.kind,
                state.balance,
                state.loan_amount,
                state.is_closable()
            ),
            Ok(Outcome::Unchanged) => println!("  - {:<22} ignored", raw.kind),
            Err(err) => println!("  ✗ {:<22} {err}", raw.kind),
        }
    }

    println!(
        "\nApplied {} transitions, final state: {}",
        session.history().len(),
        session.state().name()
    );

    println!("\n=== Example Complete ===");
}
