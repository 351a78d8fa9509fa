//! Custom Test Assertions
//!
//! Tolerance-aware assertion helpers for derived ledger views, with error
//! messages that name the offending amounts.

use core_kernel::{balance_sum_tolerance, settlement_tolerance, PersonId};
use domain_ledger::LedgerStore;
use rust_decimal::Decimal;

/// Asserts that two amounts differ by no more than `tolerance`
pub fn assert_amount_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "amounts differ by more than tolerance: actual={actual}, expected={expected}, \
         diff={diff}, tolerance={tolerance}"
    );
}

/// Asserts the zero-sum invariant on the store's current balances
///
/// # Panics
///
/// Panics if the rounded balances sum to more than 0.01 per person.
pub fn assert_balances_sum_to_zero(store: &LedgerStore) {
    let sheet = store.balances();
    let total = sheet.total();
    let tolerance = balance_sum_tolerance(store.people().len());
    assert!(
        total.abs() <= tolerance,
        "balances sum to {total}, outside tolerance {tolerance} for {} people",
        store.people().len()
    );
}

/// Asserts that the store's settlement plan drives every balance to
/// (approximately) zero
///
/// Applies each settlement to the derived balances and checks every
/// remainder against the planner's tolerances.
pub fn assert_plan_settles_all_balances(store: &LedgerStore) {
    let plan = store.settlements();
    let mut remaining: Vec<(PersonId, Decimal)> = store
        .balances()
        .entries()
        .iter()
        .map(|b| (b.person_id, b.amount))
        .collect();

    for settlement in &plan {
        assert!(
            settlement.amount > settlement_tolerance(),
            "settlement below tolerance: {}",
            settlement.amount
        );
        for (id, amount) in remaining.iter_mut() {
            if *id == settlement.from {
                *amount += settlement.amount;
            }
            if *id == settlement.to {
                *amount -= settlement.amount;
            }
        }
    }

    let slack = settlement_tolerance() + balance_sum_tolerance(store.people().len());
    for (id, amount) in remaining {
        assert!(
            amount.abs() <= slack,
            "person {id} left with unsettled {amount} (slack {slack})"
        );
    }
}
