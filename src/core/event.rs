//! Ledger events.
//!
//! Every committed transition emits one or more events. Rejected
//! transitions emit nothing. Events are the ledger's observable log:
//! hosts can index them the way a chain indexes contract logs.

use serde::{Deserialize, Serialize};

use super::clock::Timestamp;
use super::identity::Address;
use super::value::Amount;

/// Something that happened on the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A character was created or reset.
    Spawned {
        who: Address,
        health: u8,
        at: Timestamp,
    },

    /// The spawn fee left the ledger.
    FeeDisposed {
        from: Address,
        to: Address,
        amount: Amount,
    },

    /// `actor` hit `target`, leaving it at `health`.
    Hit {
        actor: Address,
        target: Address,
        health: u8,
        at: Timestamp,
    },

    /// `actor` healed `target`, leaving it at `health`.
    Healed {
        actor: Address,
        target: Address,
        health: u8,
        at: Timestamp,
    },
}

impl LedgerEvent {
    /// Check whether this event killed its target.
    #[must_use]
    pub const fn is_kill(&self) -> bool {
        matches!(self, LedgerEvent::Hit { health: 0, .. })
    }
}
