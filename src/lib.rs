//! # life-ledger
//!
//! A deterministic character ledger. Addresses spawn a character by paying
//! a fixed fee, then hit or heal other characters, at most once per
//! cooldown period.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The caller, attached value and current time arrive
//!    with every call (`Call`). The ledger never reads a clock.
//!
//! 2. **All-or-Nothing**: Each operation validates first and commits last.
//!    A rejected operation leaves no trace.
//!
//! 3. **Hard Walls**: Health lives in `[0, max]`. Transitions that would
//!    leave that range are rejected, never clamped.
//!
//! ## Modules
//!
//! - `core`: Addresses, timestamps, amounts, configuration, records, actions, events, state
//! - `rules`: The `LifeLedger` state machine and `LedgerError`
//! - `sink`: Where spawn fees go (`FeeSink`, `BurnSink`, `AccountSink`)

pub mod core;
pub mod rules;
pub mod sink;

// Re-export commonly used types
pub use crate::core::{
    Address, Timestamp, Amount, ONE_DAY_SECS,
    LedgerConfig, RespawnPolicy,
    Character, Action, ActionRecord, Call,
    LedgerEvent, LedgerState,
};

pub use crate::rules::{LifeLedger, LedgerError};

pub use crate::sink::{FeeSink, SinkError, BurnSink, AccountSink};
