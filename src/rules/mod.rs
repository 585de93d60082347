//! Ledger rules: the `LifeLedger` state machine and its error taxonomy.

pub mod engine;
pub mod error;

pub use engine::LifeLedger;
pub use error::LedgerError;
