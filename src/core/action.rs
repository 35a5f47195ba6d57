//! Actions accepted by the account state machine.
//!
//! [`Action`] is the closed set the transition function matches on.
//! [`RawAction`] is the loosely typed `{"type": ..., "payload": ...}` form
//! a caller may hand over; decoding it is the only place an unknown action
//! kind can show up.

use super::error::TransitionError;
use super::guard::Guard;
use serde::{Deserialize, Serialize};

/// A discrete request to change the account.
///
/// Serializes through [`RawAction`], so deserializing an `Action` accepts
/// the same tags and fails the same way as `Action::try_from`:
///
/// ```rust
/// use bankroll::core::Action;
///
/// let json = serde_json::to_string(&Action::ChangeDepositAmount(200)).unwrap();
/// assert_eq!(json, r#"{"type":"changeDepositAmount","payload":200}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAction", into = "RawAction")]
pub enum Action {
    OpenAccount,
    Deposit,
    ChangeDepositAmount(i64),
    Withdraw,
    ChangeWithdrawAmount(i64),
    RequestLoan,
    ChangeLoanRequestAmount(i64),
    PayLoan,
    CloseAccount,
}

impl Action {
    /// The wire tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OpenAccount => "openAccount",
            Self::Deposit => "deposit",
            Self::ChangeDepositAmount(_) => "changeDepositAmount",
            Self::Withdraw => "withdraw",
            Self::ChangeWithdrawAmount(_) => "changeWithdrawAmount",
            Self::RequestLoan => "requestLoan",
            Self::ChangeLoanRequestAmount(_) => "changeLoanRequestAmount",
            Self::PayLoan => "payLoan",
            Self::CloseAccount => "closeAccount",
        }
    }

    /// The precondition this action needs on top of the inactive gate.
    pub fn guard(&self) -> Guard {
        match self {
            Self::OpenAccount => Guard::ANY,
            Self::RequestLoan => Guard::LOAN_FREE,
            Self::CloseAccount => Guard::CLOSABLE,
            _ => Guard::ACTIVE,
        }
    }

    /// The numeric payload, if this action carries one.
    pub fn payload(&self) -> Option<i64> {
        match self {
            Self::ChangeDepositAmount(amount)
            | Self::ChangeWithdrawAmount(amount)
            | Self::ChangeLoanRequestAmount(amount) => Some(*amount),
            _ => None,
        }
    }
}

/// Untyped action as produced by a presentation layer.
///
/// `kind` is free-form; converting into [`Action`] rejects anything outside
/// the known set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<i64>,
}

impl RawAction {
    /// Build a raw action with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Build a raw action carrying an integer payload.
    pub fn with_payload(kind: impl Into<String>, payload: i64) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }

    /// Parse a raw action from its JSON form.
    pub fn from_json(input: &str) -> Result<Self, TransitionError> {
        Ok(serde_json::from_str(input)?)
    }

    fn require_payload(&self) -> Result<i64, TransitionError> {
        self.payload.ok_or_else(|| TransitionError::MissingPayload {
            kind: self.kind.clone(),
        })
    }
}

impl TryFrom<&RawAction> for Action {
    type Error = TransitionError;

    fn try_from(raw: &RawAction) -> Result<Self, Self::Error> {
        let action = match raw.kind.as_str() {
            "openAccount" => Self::OpenAccount,
            "deposit" => Self::Deposit,
            "changeDepositAmount" | "changeDepositValue" => {
                Self::ChangeDepositAmount(raw.require_payload()?)
            }
            "withdraw" => Self::Withdraw,
            "changeWithdrawAmount" | "changeWithdrawValue" => {
                Self::ChangeWithdrawAmount(raw.require_payload()?)
            }
            "requestLoan" => Self::RequestLoan,
            "changeLoanRequestAmount" | "changeRequestLoan" => {
                Self::ChangeLoanRequestAmount(raw.require_payload()?)
            }
            "payLoan" => Self::PayLoan,
            "closeAccount" => Self::CloseAccount,
            other => {
                return Err(TransitionError::UnrecognizedAction {
                    kind: other.to_string(),
                })
            }
        };
        Ok(action)
    }
}

impl TryFrom<RawAction> for Action {
    type Error = TransitionError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        Self::try_from(&raw)
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        Self {
            kind: action.kind().to_string(),
            payload: action.payload(),
        }
    }
}
