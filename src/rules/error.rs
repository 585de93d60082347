//! Ledger error taxonomy.
//!
//! Every variant is a rejected precondition. A rejected operation leaves
//! the ledger exactly as it was; retrying (for example after the cooldown
//! elapses) is up to the caller.

use crate::core::{Address, Amount};
use crate::sink::SinkError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// `spawn` carried a value other than the configured fee.
    InvalidFee { expected: Amount, got: Amount },

    /// `hit` or `heal` carried value. Only `spawn` accepts value.
    UnexpectedValue { got: Amount },

    /// The actor has no positive health.
    ActorNotAlive(Address),

    /// The actor acted less than one cooldown period ago.
    CooldownActive { actor: Address, remaining_secs: u64 },

    /// `hit` target is already at zero health.
    TargetNotAlive(Address),

    /// `heal` target is already at max health.
    TargetAtMaxHealth(Address),

    /// `spawn` on a living identity under `RespawnPolicy::RejectIfAlive`.
    AlreadyAlive(Address),

    /// The fee sink refused the transfer.
    FeeTransfer(SinkError),

    /// A snapshot could not be encoded or decoded.
    Snapshot(String),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::InvalidFee { expected, got } => {
                write!(f, "invalid fee: expected {}, got {}", expected, got)
            }
            LedgerError::UnexpectedValue { got } => {
                write!(f, "unexpected value: got {}, expected none", got)
            }
            LedgerError::ActorNotAlive(who) => write!(f, "actor {} is not alive", who),
            LedgerError::CooldownActive {
                actor,
                remaining_secs,
            } => write!(
                f,
                "actor {} is on cooldown for another {}s",
                actor, remaining_secs
            ),
            LedgerError::TargetNotAlive(who) => write!(f, "target {} is not alive", who),
            LedgerError::TargetAtMaxHealth(who) => {
                write!(f, "target {} is already at max health", who)
            }
            LedgerError::AlreadyAlive(who) => write!(f, "{} is already alive", who),
            LedgerError::FeeTransfer(e) => write!(f, "{}", e),
            LedgerError::Snapshot(msg) => write!(f, "snapshot error: {}", msg),
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedgerError::FeeTransfer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SinkError> for LedgerError {
    fn from(e: SinkError) -> Self {
        LedgerError::FeeTransfer(e)
    }
}
