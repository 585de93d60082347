//! Host-supplied time.
//!
//! The ledger never reads a wall clock. Each call carries the host's
//! current block time as a `Timestamp` with second resolution.

use serde::{Deserialize, Serialize};

/// Seconds in one day. The default action cooldown.
pub const ONE_DAY_SECS: u64 = 86_400;

/// A point in time, in whole seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Create a timestamp from seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the raw seconds value.
    #[must_use]
    pub const fn secs(self) -> u64 {
        self.0
    }

    /// Seconds elapsed since `earlier`.
    ///
    /// Saturates at zero if `earlier` is in the future.
    ///
    /// ```
    /// use life_ledger::core::Timestamp;
    ///
    /// let t0 = Timestamp::from_secs(100);
    /// let t1 = Timestamp::from_secs(160);
    /// assert_eq!(t1.elapsed_since(t0), 60);
    /// assert_eq!(t0.elapsed_since(t1), 0);
    /// ```
    #[must_use]
    pub const fn elapsed_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// This timestamp advanced by `secs` seconds (saturating).
    #[must_use]
    pub const fn plus_secs(self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t={}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed() {
        let t = Timestamp::from_secs(1_000);
        assert_eq!(t.plus_secs(ONE_DAY_SECS).elapsed_since(t), ONE_DAY_SECS);
        assert_eq!(t.elapsed_since(t), 0);
    }

    #[test]
    fn test_saturation() {
        let t = Timestamp::from_secs(u64::MAX - 1);
        assert_eq!(t.plus_secs(10), Timestamp::from_secs(u64::MAX));
        assert_eq!(Timestamp::from_secs(5).elapsed_since(Timestamp::from_secs(9)), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Timestamp::from_secs(42)), "t=42s");
    }
}
