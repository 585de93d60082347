//! Native value amounts.

use serde::{Deserialize, Serialize};

/// An amount of native value in its smallest unit (wei).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(pub u128);

impl Amount {
    /// No value.
    pub const ZERO: Amount = Amount(0);

    /// One whole unit of native value (10^18 wei).
    pub const ETHER: Amount = Amount(1_000_000_000_000_000_000);

    /// Create an amount from wei.
    #[must_use]
    pub const fn wei(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw wei value.
    #[must_use]
    pub const fn raw(self) -> u128 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition. `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction. `None` on underflow.
    #[must_use]
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wei", self.0)
    }
}
