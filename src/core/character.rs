//! Per-identity character record.

use serde::{Deserialize, Serialize};

use super::clock::Timestamp;

/// A character record.
///
/// `Character::default()` is the record of an identity that was never
/// spawned: zero health and no recorded action. It is indistinguishable
/// from a character that was killed and never acted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Current health. 0 means unborn or dead.
    pub health: u8,

    /// Time of the last `hit` or `heal` this identity performed as actor.
    pub last_action: Option<Timestamp>,
}

impl Character {
    /// A freshly spawned character.
    #[must_use]
    pub const fn spawned(max_health: u8) -> Self {
        Self {
            health: max_health,
            last_action: None,
        }
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Seconds left before this actor may act again at `now`.
    ///
    /// Zero once at least `cooldown_secs` have elapsed since the last
    /// action, and always zero before the first action.
    #[must_use]
    pub fn cooldown_remaining(&self, now: Timestamp, cooldown_secs: u64) -> u64 {
        match self.last_action {
            None => 0,
            Some(last) => cooldown_secs.saturating_sub(now.elapsed_since(last)),
        }
    }

    /// Whether this actor may act at `now`.
    #[must_use]
    pub fn cooldown_elapsed(&self, now: Timestamp, cooldown_secs: u64) -> bool {
        self.cooldown_remaining(now, cooldown_secs) == 0
    }
}
