//! Call context and actions.
//!
//! A `Call` carries what the host supplies with every operation: the
//! authenticated caller, the attached value, and the current time.
//! An `Action` is the operation itself (the "verb" plus its target).
//! Together they form an `ActionRecord`, which can be stored and replayed.

use serde::{Deserialize, Serialize};

use super::clock::Timestamp;
use super::identity::Address;
use super::value::Amount;

/// Host-supplied call context.
///
/// ## Example
///
/// ```
/// use life_ledger::core::{Address, Amount, Call, Timestamp};
///
/// let alice = Address::from_index(1);
/// let call = Call::new(alice, Timestamp::from_secs(0)).with_value(Amount::ETHER);
///
/// assert_eq!(call.actor, alice);
/// assert_eq!(call.value, Amount::ETHER);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Call {
    /// The authenticated caller.
    pub actor: Address,

    /// Value attached to the call.
    pub value: Amount,

    /// The host's time for this call.
    pub now: Timestamp,
}

impl Call {
    /// Create a call with no attached value.
    #[must_use]
    pub const fn new(actor: Address, now: Timestamp) -> Self {
        Self {
            actor,
            value: Amount::ZERO,
            now,
        }
    }

    /// Attach value to the call.
    #[must_use]
    pub const fn with_value(mut self, value: Amount) -> Self {
        self.value = value;
        self
    }
}

/// A ledger operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Create (or reset) the caller's character.
    Spawn,
    /// Reduce the target's health by one.
    Hit { target: Address },
    /// Raise the target's health by one.
    Heal { target: Address },
}

impl Action {
    /// The target of the action, if any.
    #[must_use]
    pub const fn target(&self) -> Option<Address> {
        match self {
            Action::Spawn => None,
            Action::Hit { target } | Action::Heal { target } => Some(*target),
        }
    }

    /// Short lowercase name, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::Spawn => "spawn",
            Action::Hit { .. } => "hit",
            Action::Heal { .. } => "heal",
        }
    }
}

/// A call paired with its action.
///
/// Used for:
/// - Replay of an ordered operation log
/// - Debugging and test scenarios
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub call: Call,
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub const fn new(call: Call, action: Action) -> Self {
        Self { call, action }
    }

    /// A spawn by `actor` carrying `value` at `now`.
    #[must_use]
    pub const fn spawn(actor: Address, value: Amount, now: Timestamp) -> Self {
        Self::new(Call::new(actor, now).with_value(value), Action::Spawn)
    }

    /// A hit on `target` by `actor` at `now`.
    #[must_use]
    pub const fn hit(actor: Address, target: Address, now: Timestamp) -> Self {
        Self::new(Call::new(actor, now), Action::Hit { target })
    }

    /// A heal of `target` by `actor` at `now`.
    #[must_use]
    pub const fn heal(actor: Address, target: Address, now: Timestamp) -> Self {
        Self::new(Call::new(actor, now), Action::Heal { target })
    }
}
