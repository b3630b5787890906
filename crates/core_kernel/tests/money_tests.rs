//! Integration tests for money types

use core_kernel::{Currency, Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn money_sum_keeps_full_precision() {
    let items = [dec!(33.333), dec!(33.333), dec!(33.334)];
    let total = items
        .iter()
        .fold(Money::zero(Currency::INR), |acc, amount| {
            acc + Money::new(*amount, Currency::INR)
        });

    assert_eq!(total.amount(), dec!(100.000));
}

#[test]
fn rounding_only_affects_the_copy() {
    let precise = Money::new(dec!(22.5050), Currency::INR);
    let rounded = precise.round_to_currency();

    assert_eq!(rounded.amount(), dec!(22.50));
    assert_eq!(precise.amount(), dec!(22.5050));
}

#[test]
fn display_uses_currency_symbol_and_two_decimals() {
    let m = Money::new(dec!(295), Currency::INR);
    assert_eq!(m.to_string(), "₹ 295.00");
}

#[test]
fn checked_sub_rejects_mixed_currencies() {
    let a = Money::new(dec!(10), Currency::INR);
    let b = Money::new(dec!(10), Currency::EUR);

    assert!(matches!(
        a.checked_sub(&b),
        Err(MoneyError::CurrencyMismatch(_, _))
    ));
}

#[test]
fn rate_percentage_roundtrip() {
    let rate = Rate::from_percentage(dec!(18));
    assert_eq!(rate.as_decimal(), dec!(0.18));
    assert_eq!(rate.as_percentage(), dec!(18));
    assert_eq!(rate.to_string(), "18%");
}

#[test]
fn rate_applies_to_full_precision_amount() {
    let rate = Rate::new(dec!(0.18));
    let base = Money::new(Decimal::new(2505, 1), Currency::INR); // 250.5

    assert_eq!(rate.apply(&base).amount(), dec!(45.09));
}
