//! Core ledger types: identities, time, value, configuration, records,
//! actions, events and state.
//!
//! Everything here is plain data. The transition rules live in `rules`.

pub mod identity;
pub mod clock;
pub mod value;
pub mod config;
pub mod character;
pub mod action;
pub mod event;
pub mod state;

pub use identity::Address;
pub use clock::{Timestamp, ONE_DAY_SECS};
pub use value::Amount;
pub use config::{LedgerConfig, RespawnPolicy, DEFAULT_MAX_HEALTH};
pub use character::Character;
pub use action::{Action, ActionRecord, Call};
pub use event::LedgerEvent;
pub use state::LedgerState;
