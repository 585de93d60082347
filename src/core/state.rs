//! Ledger state: the per-address character records.
//!
//! ## LedgerState
//!
//! A persistent map from `Address` to `Character`:
//! - O(1) clone via `im`, so callers can hold cheap snapshots
//! - Fx hashing for fast lookups
//! - Missing addresses read as `Character::default()`
//!
//! ## Snapshots
//!
//! `to_snapshot` encodes the records with bincode, sorted by address so
//! equal states always produce identical bytes.

use std::hash::BuildHasherDefault;

use im::HashMap as ImHashMap;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use super::character::Character;
use super::identity::Address;
use crate::rules::LedgerError;

/// Snapshot format version.
pub const SNAPSHOT_VERSION: u8 = 1;

type CharacterMap = ImHashMap<Address, Character, BuildHasherDefault<FxHasher>>;

/// All character records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerState {
    characters: CharacterMap,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u8,
    characters: Vec<(Address, Character)>,
}

impl LedgerState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record for `who`, or the default (dead, unborn) record.
    #[must_use]
    pub fn get(&self, who: Address) -> Character {
        self.characters.get(&who).copied().unwrap_or_default()
    }

    /// Store the record for `who`.
    pub fn set(&mut self, who: Address, character: Character) {
        self.characters.insert(who, character);
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// All records, sorted by address.
    #[must_use]
    pub fn sorted(&self) -> Vec<(Address, Character)> {
        let mut records: Vec<_> = self.characters.iter().map(|(a, c)| (*a, *c)).collect();
        records.sort_by_key(|(a, _)| *a);
        records
    }

    /// Encode the records as a versioned bincode snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, LedgerError> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            characters: self.sorted(),
        };
        bincode::serialize(&snapshot).map_err(|e| LedgerError::Snapshot(e.to_string()))
    }

    /// Decode a snapshot produced by `to_snapshot`.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, LedgerError> {
        let snapshot: Snapshot =
            bincode::deserialize(bytes).map_err(|e| LedgerError::Snapshot(e.to_string()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(LedgerError::Snapshot(format!(
                "unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }

        let mut state = Self::new();
        for (who, character) in snapshot.characters {
            state.set(who, character);
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Timestamp;

    #[test]
    fn test_missing_reads_default() {
        let state = LedgerState::new();
        assert_eq!(state.get(Address::from_index(7)), Character::default());
        assert!(state.is_empty());
    }

    #[test]
    fn test_set_and_count() {
        let mut state = LedgerState::new();
        state.set(Address::from_index(1), Character::spawned(10));
        state.set(Address::from_index(2), Character::default());

        assert_eq!(state.len(), 2);
        assert_eq!(state.get(Address::from_index(1)).health, 10);
        assert!(!state.get(Address::from_index(2)).is_alive());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = LedgerState::new();
        state.set(Address::from_index(1), Character::spawned(10));

        let before = state.clone();
        state.set(Address::from_index(1), Character::default());

        assert_eq!(before.get(Address::from_index(1)).health, 10);
        assert_eq!(state.get(Address::from_index(1)).health, 0);
    }

    #[test]
    fn test_sorted_order() {
        let mut state = LedgerState::new();
        for i in [5, 1, 3] {
            state.set(Address::from_index(i), Character::spawned(10));
        }
        let addrs: Vec<_> = state.sorted().into_iter().map(|(a, _)| a).collect();
        assert_eq!(
            addrs,
            vec![Address::from_index(1), Address::from_index(3), Address::from_index(5)]
        );
    }

    #[test]
    fn test_snapshot_restores_records() {
        let mut state = LedgerState::new();
        state.set(Address::from_index(1), Character::spawned(10));
        state.set(
            Address::from_index(2),
            Character {
                health: 4,
                last_action: Some(Timestamp::from_secs(123)),
            },
        );

        let bytes = state.to_snapshot().unwrap();
        let restored = LedgerState::from_snapshot(&bytes).unwrap();

        assert_eq!(restored, state);
        assert_eq!(restored.to_snapshot().unwrap(), bytes);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        let result = LedgerState::from_snapshot(&[0xff, 0x01]);
        assert!(matches!(result, Err(LedgerError::Snapshot(_))));
    }

    #[test]
    fn test_snapshot_rejects_unknown_version() {
        let bytes = bincode::serialize(&Snapshot {
            version: SNAPSHOT_VERSION + 1,
            characters: Vec::new(),
        })
        .unwrap();

        let err = LedgerState::from_snapshot(&bytes).unwrap_err();
        assert!(err.to_string().contains("unsupported snapshot version"));
    }
}
