//! Property tests for the ledger invariants.
//!
//! Random operation sequences must never push health outside `[0, max]`,
//! never partially apply a rejected operation, and never let an actor
//! act twice within one cooldown period.

use life_ledger::{
    Action, ActionRecord, Address, Amount, Call, LedgerConfig, LedgerError, LifeLedger,
    Timestamp,
};
use proptest::prelude::*;

const PLAYERS: u64 = 4;

fn arb_address() -> impl Strategy<Value = Address> {
    (1..=PLAYERS).prop_map(Address::from_index)
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Spawn),
        arb_address().prop_map(|target| Action::Hit { target }),
        arb_address().prop_map(|target| Action::Heal { target }),
    ]
}

/// Attached value: mostly none or the exact fee, sometimes something else.
fn arb_value() -> impl Strategy<Value = Amount> {
    prop_oneof![
        3 => Just(Amount::ZERO),
        3 => Just(Amount::ETHER),
        1 => (1u128..1_000).prop_map(Amount::wei),
    ]
}

/// Operations with non-decreasing timestamps, as a host would supply them.
/// Any action may carry value, including hits and heals.
fn arb_history(max_len: usize) -> impl Strategy<Value = Vec<ActionRecord>> {
    prop::collection::vec((arb_address(), arb_action(), 0u64..50_000, arb_value()), 0..max_len)
        .prop_map(|steps| {
            let mut now = 0u64;
            steps
                .into_iter()
                .map(|(actor, action, advance, value)| {
                    now += advance;
                    ActionRecord::new(
                        Call::new(actor, Timestamp::from_secs(now)).with_value(value),
                        action,
                    )
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn health_stays_in_bounds(history in arb_history(200)) {
        let mut ledger = LifeLedger::default();
        let max = ledger.config().max_health;

        for record in &history {
            let _ = ledger.apply(record);
            for i in 1..=PLAYERS {
                prop_assert!(ledger.health(Address::from_index(i)) <= max);
            }
        }
    }

    #[test]
    fn rejections_leave_state_unchanged(history in arb_history(200)) {
        let mut ledger = LifeLedger::default();

        for record in &history {
            let before = ledger.state().clone();
            let burned = ledger.sink().burned();
            let received = ledger.total_received();
            let events = ledger.events().len();

            if ledger.apply(record).is_err() {
                prop_assert_eq!(ledger.state(), &before);
                prop_assert_eq!(ledger.sink().burned(), burned);
                prop_assert_eq!(ledger.total_received(), received);
                prop_assert_eq!(ledger.events().len(), events);
            }
        }
    }

    #[test]
    fn received_value_is_all_disposed(history in arb_history(100)) {
        let mut ledger = LifeLedger::default();
        for record in &history {
            let _ = ledger.apply(record);
            prop_assert_eq!(ledger.balance(), Amount::ZERO);
            prop_assert_eq!(ledger.total_received(), ledger.sink().burned());
            prop_assert_eq!(ledger.total_forwarded(), ledger.sink().burned());
        }
    }

    #[test]
    fn valued_hit_or_heal_is_rejected(history in arb_history(100)) {
        let mut ledger = LifeLedger::default();
        for record in &history {
            let result = ledger.apply(record);
            if !matches!(record.action, Action::Spawn) && !record.call.value.is_zero() {
                prop_assert_eq!(
                    result,
                    Err(LedgerError::UnexpectedValue { got: record.call.value })
                );
            }
        }
    }

    #[test]
    fn hit_decrements_by_exactly_one(history in arb_history(100)) {
        let mut ledger = LifeLedger::default();

        for record in &history {
            let target = record.action.target();
            let before = target.map(|t| ledger.health(t));

            let ok = ledger.apply(record).is_ok();
            match (record.action, before, ok) {
                (Action::Hit { target }, Some(h), true) => {
                    prop_assert_eq!(ledger.health(target), h - 1);
                }
                (Action::Heal { target }, Some(h), true) => {
                    prop_assert_eq!(ledger.health(target), h + 1);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn cooldown_boundary_is_inclusive(
        start in 0u64..1_000_000,
        cooldown in 1u64..200_000,
        wait in 0u64..400_000,
    ) {
        let config = LedgerConfig::default().with_cooldown(cooldown);
        let mut ledger = LifeLedger::with_burn(config);
        let (a, b) = (Address::from_index(1), Address::from_index(2));
        let t0 = Timestamp::from_secs(start);

        ledger.spawn(&Call::new(a, t0).with_value(Amount::ETHER)).unwrap();
        ledger.spawn(&Call::new(b, t0).with_value(Amount::ETHER)).unwrap();
        ledger.hit(&Call::new(a, t0), b).unwrap();

        let result = ledger.heal(&Call::new(a, t0.plus_secs(wait)), b);
        if wait >= cooldown {
            prop_assert!(result.is_ok());
            prop_assert_eq!(ledger.health(b), 10);
        } else {
            prop_assert_eq!(
                result,
                Err(LedgerError::CooldownActive { actor: a, remaining_secs: cooldown - wait })
            );
            prop_assert_eq!(ledger.health(b), 9);
        }
    }

    #[test]
    fn snapshot_restores_identical_state(history in arb_history(100)) {
        let mut ledger = LifeLedger::default();
        for record in &history {
            let _ = ledger.apply(record);
        }

        let bytes = ledger.snapshot().unwrap();
        let mut restored = LifeLedger::default();
        restored.restore(&bytes).unwrap();

        prop_assert_eq!(restored.state(), ledger.state());
    }
}
