//! Ledger configuration.
//!
//! Hosts configure the ledger at construction time:
//! - `fee`: exact value `spawn` must carry
//! - `cooldown_secs`: minimum time between an actor's actions
//! - `max_health`: health of a freshly spawned character
//! - `respawn`: what `spawn` does for an identity that already has a record

use serde::{Deserialize, Deserializer, Serialize};

use super::clock::ONE_DAY_SECS;
use super::value::Amount;

/// Default health of a freshly spawned character.
pub const DEFAULT_MAX_HEALTH: u8 = 10;

/// Policy for `spawn` on an identity that is already alive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespawnPolicy {
    /// Reset health to max and clear the cooldown, alive or not.
    #[default]
    Reset,
    /// Reject with `AlreadyAlive` while the identity has positive health.
    RejectIfAlive,
}

/// Ledger configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Exact value required by `spawn` (default: 1 ether).
    pub fee: Amount,

    /// Seconds an actor must wait between `hit`/`heal` actions (default: one day).
    pub cooldown_secs: u64,

    /// Health of a freshly spawned character and the `heal` ceiling (default: 10).
    #[serde(deserialize_with = "positive_health")]
    pub max_health: u8,

    /// Respawn behavior (default: `Reset`).
    pub respawn: RespawnPolicy,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            fee: Amount::ETHER,
            cooldown_secs: ONE_DAY_SECS,
            max_health: DEFAULT_MAX_HEALTH,
            respawn: RespawnPolicy::Reset,
        }
    }
}

impl LedgerConfig {
    /// Set the spawn fee.
    #[must_use]
    pub fn with_fee(mut self, fee: Amount) -> Self {
        self.fee = fee;
        self
    }

    /// Set the cooldown in seconds.
    #[must_use]
    pub fn with_cooldown(mut self, secs: u64) -> Self {
        self.cooldown_secs = secs;
        self
    }

    /// Set the maximum health.
    #[must_use]
    pub fn with_max_health(mut self, max_health: u8) -> Self {
        assert!(max_health > 0, "Max health must be positive");
        self.max_health = max_health;
        self
    }

    /// Set the respawn policy.
    #[must_use]
    pub fn with_respawn(mut self, policy: RespawnPolicy) -> Self {
        self.respawn = policy;
        self
    }
}

/// Deserialized configs get the same check as `with_max_health`.
fn positive_health<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let max_health = u8::deserialize(deserializer)?;
    if max_health == 0 {
        return Err(serde::de::Error::custom("max_health must be positive"));
    }
    Ok(max_health)
}
