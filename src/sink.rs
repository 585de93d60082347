//! Fee disposal.
//!
//! `spawn` never keeps the fee it receives. It hands the value to a
//! `FeeSink` within the same operation, so the ledger's own balance is
//! the same after the call as before it.
//!
//! Two sinks are provided:
//! - `BurnSink`: tallies value sent to `Address::ZERO`
//! - `AccountSink`: credits a configured account

use crate::core::{Address, Amount};

/// A rejected fee transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkError {
    pub reason: String,
}

impl SinkError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fee transfer rejected: {}", self.reason)
    }
}

impl std::error::Error for SinkError {}

/// Destination for spawn fees.
///
/// `dispose` must be all-or-nothing: on `Err` it leaves no trace, so the
/// ledger can abort the spawn without partial effects.
pub trait FeeSink {
    /// Where disposed value ends up.
    fn destination(&self) -> Address;

    /// Take `amount` paid by `from`.
    fn dispose(&mut self, from: Address, amount: Amount) -> Result<(), SinkError>;
}

/// Burns fees by sending them to the zero address.
#[derive(Clone, Debug, Default)]
pub struct BurnSink {
    burned: Amount,
}

impl BurnSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total value burned so far.
    #[must_use]
    pub fn burned(&self) -> Amount {
        self.burned
    }
}

impl FeeSink for BurnSink {
    fn destination(&self) -> Address {
        Address::ZERO
    }

    fn dispose(&mut self, _from: Address, amount: Amount) -> Result<(), SinkError> {
        self.burned = self
            .burned
            .checked_add(amount)
            .ok_or_else(|| SinkError::new("burn total overflow"))?;
        Ok(())
    }
}

/// Forwards fees to a single account.
#[derive(Clone, Debug)]
pub struct AccountSink {
    account: Address,
    received: Amount,
}

impl AccountSink {
    /// Create a sink crediting `account`.
    #[must_use]
    pub fn new(account: Address) -> Self {
        Self {
            account,
            received: Amount::ZERO,
        }
    }

    /// Total credited to the account so far.
    #[must_use]
    pub fn received(&self) -> Amount {
        self.received
    }
}

impl FeeSink for AccountSink {
    fn destination(&self) -> Address {
        self.account
    }

    fn dispose(&mut self, _from: Address, amount: Amount) -> Result<(), SinkError> {
        self.received = self
            .received
            .checked_add(amount)
            .ok_or_else(|| SinkError::new(format!("balance overflow for {}", self.account)))?;
        Ok(())
    }
}
