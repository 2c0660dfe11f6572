//! Monthly compounding engine.
//!
//! Every projection here walks the same loop: each month the running value
//! grows by the monthly rate, then the contribution is added. Values are kept
//! at full precision inside the loop and rounded half-up to cents only on
//! output.

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{MONTHS_IN_YEAR, RATE_SCALE};
use crate::utils::{add_months, divide_half_up, months_between, round_money};

use super::ForecastPoint;

/// Converts an annual return in percent to a monthly rate.
///
/// Both divisions round half-up to 8 places.
pub fn monthly_rate(annual_return_percent: Decimal) -> Decimal {
    divide_half_up(annual_return_percent, dec!(100), RATE_SCALE)
        .and_then(|annual| divide_half_up(annual, Decimal::from(MONTHS_IN_YEAR), RATE_SCALE))
        .unwrap_or(Decimal::ZERO)
}

fn step(value: Decimal, growth: Decimal, contribution: Decimal) -> Decimal {
    value.saturating_mul(growth).saturating_add(contribution)
}

/// Value of `principal` after `months` periods, rounded to cents.
pub fn compound(
    principal: Decimal,
    monthly_rate: Decimal,
    months: u32,
    monthly_contribution: Decimal,
) -> Decimal {
    let growth = Decimal::ONE.saturating_add(monthly_rate);
    let value = (0..months).fold(principal, |value, _| {
        step(value, growth, monthly_contribution)
    });
    round_money(value)
}

/// Month-by-month walk of [`compound`], yielding `months + 1` points.
///
/// Each point is dated one calendar month after the previous one, so a
/// month-end start clamps once and stays there (Jan 31, Feb 29, Mar 29).
#[derive(Debug, Clone)]
pub struct TrajectoryIter {
    date: NaiveDate,
    value: Decimal,
    growth: Decimal,
    contribution: Decimal,
    month: u32,
    months: u32,
    finished: bool,
}

impl TrajectoryIter {
    pub fn new(
        start: NaiveDate,
        principal: Decimal,
        monthly_rate: Decimal,
        months: u32,
        monthly_contribution: Decimal,
    ) -> Self {
        Self {
            date: start,
            value: principal,
            growth: Decimal::ONE.saturating_add(monthly_rate),
            contribution: monthly_contribution,
            month: 0,
            months,
            finished: false,
        }
    }
}

impl Iterator for TrajectoryIter {
    type Item = ForecastPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let point = ForecastPoint {
            date: self.date,
            value: round_money(self.value),
        };
        if self.month == self.months {
            self.finished = true;
        } else {
            self.value = step(self.value, self.growth, self.contribution);
            self.date = add_months(self.date, 1);
            self.month += 1;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished {
            0
        } else {
            (self.months - self.month) as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrajectoryIter {}

pub fn build_trajectory(
    start: NaiveDate,
    principal: Decimal,
    monthly_rate: Decimal,
    months: u32,
    monthly_contribution: Decimal,
) -> Vec<ForecastPoint> {
    TrajectoryIter::new(start, principal, monthly_rate, months, monthly_contribution).collect()
}

/// Sum of `(1 + rate)^i` for `i` in `0..months`: what one unit contributed at
/// the end of every month is worth after the last month.
fn accumulation_factor(monthly_rate: Decimal, months: u32) -> Decimal {
    let growth = Decimal::ONE.saturating_add(monthly_rate);
    let mut power = Decimal::ONE;
    let mut factor = Decimal::ZERO;
    for _ in 0..months {
        factor = factor.saturating_add(power);
        power = power.saturating_mul(growth);
    }
    factor
}

/// Constant monthly contribution that brings `principal` to `target` after
/// `months` periods of [`compound`].
///
/// The result is not rounded; feeding it back into [`compound`] lands within
/// a cent of `target`. Zero when the target is already reached without
/// contributions. With no months left the whole shortfall is due now.
pub fn required_monthly_contribution(
    principal: Decimal,
    target: Decimal,
    monthly_rate: Decimal,
    months: u32,
) -> Decimal {
    if months == 0 {
        return target.saturating_sub(principal).max(Decimal::ZERO);
    }

    let gap = target.saturating_sub(compound(principal, monthly_rate, months, Decimal::ZERO));
    if gap <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let factor = accumulation_factor(monthly_rate, months);
    if factor.is_zero() {
        warn!(
            "Accumulation factor is zero for rate {} over {} months. Returning no contribution.",
            monthly_rate, months
        );
        return Decimal::ZERO;
    }
    gap.checked_div(factor).unwrap_or(Decimal::ZERO)
}

/// Picks the projection horizon: a positive `explicit_months` wins, then the
/// whole months from `today` to `target_date` (never negative), then
/// `default_months`.
pub fn resolve_months(
    explicit_months: Option<i32>,
    target_date: Option<NaiveDate>,
    today: NaiveDate,
    default_months: u32,
) -> u32 {
    if let Some(months) = explicit_months.and_then(|m| u32::try_from(m).ok()).filter(|m| *m > 0) {
        return months;
    }
    if let Some(target_date) = target_date {
        let months = months_between(today, target_date).max(0);
        debug!(
            "Resolved horizon of {} months from {} to {}",
            months, today, target_date
        );
        return u32::try_from(months).unwrap_or(u32::MAX);
    }
    debug!("No horizon given. Using default of {} months", default_months);
    default_months
}
