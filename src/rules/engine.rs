//! The life ledger state machine.
//!
//! Identities move through health values:
//! - 0 (unborn or dead) → max (spawned)
//! - down by one per `hit`, up by one per `heal`
//!
//! 0 and max are hard walls: the transition that would cross one is
//! rejected, never saturated. Independently, each actor carries a single
//! cooldown clock that every successful `hit` or `heal` re-arms.
//!
//! ## Atomicity
//!
//! Every operation validates first and commits last. Nothing is written
//! until all preconditions (and the fee transfer, for `spawn`) succeed.

use im::Vector;

use crate::core::{
    Action, ActionRecord, Address, Amount, Call, Character, LedgerConfig, LedgerEvent,
    LedgerState, RespawnPolicy, Timestamp,
};
use crate::rules::LedgerError;
use crate::sink::{BurnSink, FeeSink, SinkError};

/// The character ledger.
///
/// ## Example
///
/// ```
/// use life_ledger::core::{Address, Amount, Call, LedgerConfig, Timestamp};
/// use life_ledger::rules::{LedgerError, LifeLedger};
///
/// let mut ledger = LifeLedger::with_burn(LedgerConfig::default());
/// let (a, b) = (Address::from_index(1), Address::from_index(2));
/// let t0 = Timestamp::from_secs(0);
///
/// ledger.spawn(&Call::new(a, t0).with_value(Amount::ETHER))?;
/// ledger.spawn(&Call::new(b, t0).with_value(Amount::ETHER))?;
///
/// ledger.hit(&Call::new(a, t0), b)?;
/// assert_eq!(ledger.health(b), 9);
///
/// let again = ledger.hit(&Call::new(a, t0), b);
/// assert!(matches!(again, Err(LedgerError::CooldownActive { .. })));
/// # Ok::<(), LedgerError>(())
/// ```
#[derive(Clone, Debug)]
pub struct LifeLedger<S: FeeSink = BurnSink> {
    config: LedgerConfig,
    state: LedgerState,
    sink: S,
    /// Value that arrived with accepted calls.
    received: Amount,
    /// Value handed on to the sink.
    forwarded: Amount,
    events: Vector<LedgerEvent>,
}

impl LifeLedger<BurnSink> {
    /// Create a ledger that burns spawn fees.
    #[must_use]
    pub fn with_burn(config: LedgerConfig) -> Self {
        Self::new(config, BurnSink::new())
    }
}

impl Default for LifeLedger<BurnSink> {
    fn default() -> Self {
        Self::with_burn(LedgerConfig::default())
    }
}

impl<S: FeeSink> LifeLedger<S> {
    /// Create a ledger forwarding spawn fees to `sink`.
    #[must_use]
    pub fn new(config: LedgerConfig, sink: S) -> Self {
        assert!(config.max_health > 0, "Max health must be positive");

        Self {
            config,
            state: LedgerState::new(),
            sink,
            received: Amount::ZERO,
            forwarded: Amount::ZERO,
            events: Vector::new(),
        }
    }

    // === Queries ===

    /// Health of `who`. Zero if never spawned.
    #[must_use]
    pub fn health(&self, who: Address) -> u8 {
        self.state.get(who).health
    }

    /// Full record of `who`.
    #[must_use]
    pub fn character(&self, who: Address) -> Character {
        self.state.get(who)
    }

    #[must_use]
    pub fn is_alive(&self, who: Address) -> bool {
        self.state.get(who).is_alive()
    }

    /// Seconds until `who` may act again, as seen at `now`.
    #[must_use]
    pub fn cooldown_remaining(&self, who: Address, now: Timestamp) -> u64 {
        self.state
            .get(who)
            .cooldown_remaining(now, self.config.cooldown_secs)
    }

    /// Value held by the ledger itself: everything received minus
    /// everything forwarded. Spawning leaves it unchanged.
    #[must_use]
    pub fn balance(&self) -> Amount {
        self.received
            .checked_sub(self.forwarded)
            .unwrap_or(Amount::ZERO)
    }

    /// Total value received with accepted calls.
    #[must_use]
    pub fn total_received(&self) -> Amount {
        self.received
    }

    /// Total value handed to the sink.
    #[must_use]
    pub fn total_forwarded(&self) -> Amount {
        self.forwarded
    }

    #[must_use]
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Events emitted by committed operations, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<LedgerEvent> {
        &self.events
    }

    /// Remove and return all pending events.
    pub fn take_events(&mut self) -> Vector<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    // === Operations ===

    /// Create or reset the caller's character.
    ///
    /// `call.value` must equal the configured fee. The fee is handed to
    /// the sink before anything is committed.
    pub fn spawn(&mut self, call: &Call) -> Result<(), LedgerError> {
        self.apply(&ActionRecord::new(*call, Action::Spawn))
    }

    /// Reduce `target`'s health by one.
    ///
    /// Fails, in order of precedence, with `UnexpectedValue`,
    /// `ActorNotAlive`, `CooldownActive`, or `TargetNotAlive`.
    pub fn hit(&mut self, call: &Call, target: Address) -> Result<(), LedgerError> {
        self.apply(&ActionRecord::new(*call, Action::Hit { target }))
    }

    /// Raise `target`'s health by one.
    ///
    /// Fails, in order of precedence, with `UnexpectedValue`,
    /// `ActorNotAlive`, `CooldownActive`, or `TargetAtMaxHealth`. A dead
    /// target can be healed back to life.
    pub fn heal(&mut self, call: &Call, target: Address) -> Result<(), LedgerError> {
        self.apply(&ActionRecord::new(*call, Action::Heal { target }))
    }

    /// Apply a recorded action.
    pub fn apply(&mut self, record: &ActionRecord) -> Result<(), LedgerError> {
        let call = &record.call;
        let result = match record.action {
            Action::Spawn => self.apply_spawn(call),
            Action::Hit { target } => self.apply_hit(call, target),
            Action::Heal { target } => self.apply_heal(call, target),
        };

        if let Err(e) = &result {
            tracing::debug!(
                action = record.action.name(),
                actor = %call.actor,
                now = call.now.secs(),
                error = %e,
                "rejected"
            );
        }

        result
    }

    /// Apply records in order.
    ///
    /// Stops at the first rejection and returns its index with the error.
    /// Records before it stay applied. Returns the number of records
    /// applied on success.
    pub fn replay<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a ActionRecord>,
    ) -> Result<usize, (usize, LedgerError)> {
        let mut applied = 0;
        for (index, record) in records.into_iter().enumerate() {
            self.apply(record).map_err(|e| (index, e))?;
            applied += 1;
        }
        Ok(applied)
    }

    // === Snapshots ===

    /// Encode the character records.
    pub fn snapshot(&self) -> Result<Vec<u8>, LedgerError> {
        self.state.to_snapshot()
    }

    /// Replace the character records with a decoded snapshot.
    ///
    /// On error the current records and events are kept. Records above
    /// this ledger's max health are rejected. On success the event log is
    /// cleared, since it described the replaced records.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), LedgerError> {
        let state = LedgerState::from_snapshot(bytes)?;
        let max = self.config.max_health;
        if let Some((who, c)) = state.sorted().into_iter().find(|(_, c)| c.health > max) {
            return Err(LedgerError::Snapshot(format!(
                "{} has health {} above max {}",
                who, c.health, max
            )));
        }

        tracing::info!(records = state.len(), "restored ledger snapshot");
        self.state = state;
        self.events.clear();
        Ok(())
    }

    // === Transitions ===

    fn apply_spawn(&mut self, call: &Call) -> Result<(), LedgerError> {
        if call.value != self.config.fee {
            return Err(LedgerError::InvalidFee {
                expected: self.config.fee,
                got: call.value,
            });
        }

        let current = self.state.get(call.actor);
        if self.config.respawn == RespawnPolicy::RejectIfAlive && current.is_alive() {
            return Err(LedgerError::AlreadyAlive(call.actor));
        }

        // Credited on arrival, debited once the sink takes it.
        let received = self
            .received
            .checked_add(call.value)
            .ok_or_else(|| SinkError::new("received total overflow"))?;
        let forwarded = self
            .forwarded
            .checked_add(call.value)
            .ok_or_else(|| SinkError::new("forwarded total overflow"))?;
        self.sink.dispose(call.actor, call.value)?;
        self.received = received;
        self.forwarded = forwarded;

        let spawned = Character::spawned(self.config.max_health);
        self.state.set(call.actor, spawned);

        tracing::debug!(who = %call.actor, health = spawned.health, "spawned");

        self.events.push_back(LedgerEvent::FeeDisposed {
            from: call.actor,
            to: self.sink.destination(),
            amount: call.value,
        });
        self.events.push_back(LedgerEvent::Spawned {
            who: call.actor,
            health: spawned.health,
            at: call.now,
        });

        Ok(())
    }

    fn apply_hit(&mut self, call: &Call, target: Address) -> Result<(), LedgerError> {
        self.check_actor(call)?;

        let victim = self.state.get(target);
        if !victim.is_alive() {
            return Err(LedgerError::TargetNotAlive(target));
        }

        let health = victim.health - 1;
        self.commit(call, target, health);

        tracing::debug!(actor = %call.actor, target = %target, health, "hit");
        self.events.push_back(LedgerEvent::Hit {
            actor: call.actor,
            target,
            health,
            at: call.now,
        });

        Ok(())
    }

    fn apply_heal(&mut self, call: &Call, target: Address) -> Result<(), LedgerError> {
        self.check_actor(call)?;

        let patient = self.state.get(target);
        if patient.health >= self.config.max_health {
            return Err(LedgerError::TargetAtMaxHealth(target));
        }

        let health = patient.health + 1;
        self.commit(call, target, health);

        tracing::debug!(actor = %call.actor, target = %target, health, "healed");
        self.events.push_back(LedgerEvent::Healed {
            actor: call.actor,
            target,
            health,
            at: call.now,
        });

        Ok(())
    }

    /// No value attached, actor alive and off cooldown.
    fn check_actor(&self, call: &Call) -> Result<(), LedgerError> {
        if !call.value.is_zero() {
            return Err(LedgerError::UnexpectedValue { got: call.value });
        }

        let actor = self.state.get(call.actor);
        if !actor.is_alive() {
            return Err(LedgerError::ActorNotAlive(call.actor));
        }

        let remaining_secs = actor.cooldown_remaining(call.now, self.config.cooldown_secs);
        if remaining_secs > 0 {
            return Err(LedgerError::CooldownActive {
                actor: call.actor,
                remaining_secs,
            });
        }

        Ok(())
    }

    /// Write the target's new health, then re-arm the actor's cooldown.
    ///
    /// Target first: when actor and target are the same identity, the
    /// second write must see the new health.
    fn commit(&mut self, call: &Call, target: Address, health: u8) {
        let mut victim = self.state.get(target);
        victim.health = health;
        self.state.set(target, victim);

        let mut actor = self.state.get(call.actor);
        actor.last_action = Some(call.now);
        self.state.set(call.actor, actor);
    }
}
