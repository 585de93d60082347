//! Participant identity.
//!
//! Every participant (actor or target) is identified by an `Address`.
//! The host environment authenticates callers; the ledger only compares
//! addresses for equality and uses them as map keys.
//!
//! ## Usage
//!
//! ```
//! use life_ledger::core::Address;
//!
//! let alice = Address::from_index(1);
//! let bob = Address::from_index(2);
//!
//! assert_ne!(alice, bob);
//! assert!(Address::ZERO.is_zero());
//! assert_eq!(
//!     format!("{}", alice),
//!     "0x0000000000000000000000000000000000000001"
//! );
//! ```

use serde::{Deserialize, Serialize};

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte participant identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address. Used as the burn destination.
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    /// Create an address from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Create an address whose low 8 bytes hold `index` (big-endian).
    ///
    /// Handy for tests and simulations that need many distinct identities.
    ///
    /// ```
    /// use life_ledger::core::Address;
    ///
    /// let a = Address::from_index(0x0102);
    /// assert_eq!(a.as_bytes()[18], 0x01);
    /// assert_eq!(a.as_bytes()[19], 0x02);
    /// ```
    #[must_use]
    pub fn from_index(index: u64) -> Self {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[ADDRESS_LEN - 8..].copy_from_slice(&index.to_be_bytes());
        Self(bytes)
    }

    /// Get the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Check whether this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
