//! Currency-scale decimal arithmetic
//!
//! The ledger tracks a single implicit currency, so amounts are plain
//! `Decimal` values rather than a tagged money type. This module holds the
//! rounding and tolerance rules shared by balance derivation and settlement
//! planning.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Rounds an amount to 2 decimal places, half away from zero.
///
/// Derived balances are rounded exactly once, after all expenses have been
/// accumulated, so per-expense rounding error never compounds.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The magnitude below which a balance counts as settled.
///
/// Balances within one cent of zero are noise left over from equal-share
/// division and are excluded from settlement planning.
pub fn settlement_tolerance() -> Decimal {
    dec!(0.01)
}

/// Returns true if the amount is within the settlement tolerance of zero.
pub fn is_settled(amount: Decimal) -> bool {
    amount.abs() <= settlement_tolerance()
}

/// The allowed drift when summing rounded balances over `person_count` people.
///
/// Each rounded balance may be off by at most half a cent, so the zero-sum
/// invariant holds up to one cent per person.
pub fn balance_sum_tolerance(person_count: usize) -> Decimal {
    settlement_tolerance() * Decimal::from(person_count as u64)
}
