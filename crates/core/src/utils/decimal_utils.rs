//! Rounding helpers shared by the calculation engines.
//!
//! All rounding here is half-up (midpoint away from zero). `Decimal::round_dp`
//! rounds half-to-even and must not be used for monetary or percentage output.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::{MONEY_SCALE, PERCENT_SCALE};

/// Rounds `value` half-up to `scale` decimal places.
pub fn round_half_up(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a monetary amount half-up to cents.
pub fn round_money(value: Decimal) -> Decimal {
    round_half_up(value, MONEY_SCALE)
}

/// Rounds a percentage half-up to two decimal places.
pub fn round_percent(value: Decimal) -> Decimal {
    round_half_up(value, PERCENT_SCALE)
}

/// Divides and rounds the quotient half-up to `scale` places.
///
/// Returns `None` when `divisor` is zero or the quotient overflows.
pub fn divide_half_up(dividend: Decimal, divisor: Decimal, scale: u32) -> Option<Decimal> {
    if divisor.is_zero() {
        return None;
    }
    dividend
        .checked_div(divisor)
        .map(|quotient| round_half_up(quotient, scale))
}

/// `value / total * 100`, with the quotient rounded to `division_scale` places
/// before scaling. Zero when `total` is zero.
pub fn ratio_percent(value: Decimal, total: Decimal, division_scale: u32) -> Decimal {
    divide_half_up(value, total, division_scale)
        .map(|ratio| ratio.saturating_mul(dec!(100)))
        .unwrap_or(Decimal::ZERO)
}
