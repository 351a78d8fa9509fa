//! Property-Based Test Generators
//!
//! Proptest strategies that build ledgers through the store, so every
//! generated value satisfies the domain invariants by construction.

use chrono::NaiveDate;
use domain_ledger::{ExpenseDraft, LedgerState, LedgerStore};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for positive currency-scale amounts (0.01 to 10,000.00)
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for valid calendar dates within one year
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1u32..=12, 1u32..=28).prop_map(|(month, day)| {
        NaiveDate::from_ymd_opt(2024, month, day).expect("day <= 28 is valid in every month")
    })
}

/// Raw material for one generated expense
#[derive(Debug, Clone)]
pub struct ExpenseSeed {
    /// Amount in cents
    pub cents: i64,
    /// Payer selector, reduced modulo the people count
    pub payer: u8,
    /// Split membership bitmask over people indices
    pub split_mask: u8,
    /// Day of a fixed month
    pub day: u32,
}

fn expense_seed_strategy() -> impl Strategy<Value = ExpenseSeed> {
    (1i64..1_000_000i64, any::<u8>(), 1u8..=255u8, 1u32..=28).prop_map(
        |(cents, payer, split_mask, day)| ExpenseSeed {
            cents,
            payer,
            split_mask,
            day,
        },
    )
}

/// Strategy for fully populated, invariant-satisfying stores
///
/// People get distinct names; each expense seed picks its payer and split
/// from the generated people, skipping seeds whose mask selects nobody.
pub fn ledger_store_strategy() -> impl Strategy<Value = LedgerStore> {
    (
        1usize..7,
        proptest::collection::vec(expense_seed_strategy(), 0..12),
    )
        .prop_map(|(person_count, seeds)| build_store(person_count, seeds))
}

/// Strategy for valid ledger snapshots, including sparse and empty ones
pub fn ledger_state_strategy() -> impl Strategy<Value = LedgerState> {
    prop_oneof![
        1 => Just(LedgerState::default()),
        9 => ledger_store_strategy().prop_map(|store| store.snapshot()),
    ]
}

fn build_store(person_count: usize, seeds: Vec<ExpenseSeed>) -> LedgerStore {
    let mut store = LedgerStore::new();
    let people: Vec<_> = (0..person_count)
        .map(|i| {
            store
                .add_person(format!("Person {i}"))
                .expect("generated names are distinct")
        })
        .collect();

    for seed in seeds {
        let payer = people[seed.payer as usize % people.len()].id;
        let split: Vec<_> = people
            .iter()
            .enumerate()
            .filter(|(i, _)| seed.split_mask & (1 << (i % 8)) != 0)
            .map(|(_, p)| p.id)
            .collect();
        if split.is_empty() {
            continue;
        }
        store
            .add_expense(
                ExpenseDraft::new("generated expense", Decimal::new(seed.cents, 2))
                    .with_category("General")
                    .with_date(
                        NaiveDate::from_ymd_opt(2024, 6, seed.day)
                            .expect("day <= 28 is valid in June"),
                    )
                    .with_payer(payer)
                    .with_split(split),
            )
            .expect("generated drafts are valid");
    }

    store
}
