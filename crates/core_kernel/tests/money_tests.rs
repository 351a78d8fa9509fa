//! Integration tests for currency-scale arithmetic

use core_kernel::{balance_sum_tolerance, is_settled, round2, settlement_tolerance};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn equal_share_division_rounds_to_expected_cents() {
    // 100 / 3 accumulates to 33.333..., rounded once at the end.
    let share = dec!(100) / Decimal::from(3u64);
    assert_eq!(round2(share), dec!(33.33));
    assert_eq!(round2(share * dec!(2)), dec!(66.67));
}

#[test]
fn tolerance_is_one_cent() {
    assert_eq!(settlement_tolerance(), dec!(0.01));
    assert!(is_settled(dec!(-0.005)));
}

#[test]
fn rounded_three_way_split_drifts_within_sum_tolerance() {
    let share = round2(dec!(100) / Decimal::from(3u64));
    let drift = (share * dec!(3) - dec!(100)).abs();
    assert!(drift <= balance_sum_tolerance(3));
}
