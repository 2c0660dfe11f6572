use log::warn;
use rust_decimal::Decimal;

use crate::constants::MONEY_SCALE;
use crate::portfolio::snapshot::Snapshot;
use crate::utils::{add_months, divide_half_up, round_money};

use super::{ForecastPoint, TrendForecast};

const NOT_ENOUGH_DATA: &str = "Not enough value history to project a trend.";
const UPWARD_TREND: &str = "Recorded values point to steady growth if the trend holds.";
const DOWNWARD_TREND: &str = "Recorded values point to a decline if the trend holds.";

/// Least-squares line `value = slope * index + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: Decimal,
    pub intercept: Decimal,
}

impl LinearFit {
    pub fn value_at(&self, index: Decimal) -> Option<Decimal> {
        self.slope.checked_mul(index)?.checked_add(self.intercept)
    }
}

/// Fits a line through `(i, values[i])`.
///
/// The slope denominator is floored at one, so a single value gives a flat
/// line through it. `None` for an empty series or on overflow.
pub fn fit_line(values: &[Decimal]) -> Option<LinearFit> {
    if values.is_empty() {
        return None;
    }
    let n = Decimal::from(values.len());
    let mut sum_x = Decimal::ZERO;
    let mut sum_y = Decimal::ZERO;
    let mut sum_xy = Decimal::ZERO;
    let mut sum_xx = Decimal::ZERO;
    for (i, y) in values.iter().enumerate() {
        let x = Decimal::from(i);
        sum_x = sum_x.checked_add(x)?;
        sum_y = sum_y.checked_add(*y)?;
        sum_xy = sum_xy.checked_add(x.checked_mul(*y)?)?;
        sum_xx = sum_xx.checked_add(x.checked_mul(x)?)?;
    }

    let numerator = n
        .checked_mul(sum_xy)?
        .checked_sub(sum_x.checked_mul(sum_y)?)?;
    let denominator = n
        .checked_mul(sum_xx)?
        .checked_sub(sum_x.checked_mul(sum_x)?)?
        .max(Decimal::ONE);
    let slope = numerator.checked_div(denominator)?;
    let intercept = sum_y.checked_sub(slope.checked_mul(sum_x)?)?.checked_div(n)?;
    Some(LinearFit { slope, intercept })
}

/// Trailing average over up to `window` points ending at each point, in cents.
/// Early points average over what is available.
pub fn moving_average(points: &[ForecastPoint], window: usize) -> Vec<ForecastPoint> {
    let window = window.max(1);
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let slice = &points[(i + 1).saturating_sub(window)..=i];
            let sum = slice
                .iter()
                .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.value));
            let value = divide_half_up(sum, Decimal::from(slice.len()), MONEY_SCALE)
                .unwrap_or(Decimal::ZERO);
            ForecastPoint {
                date: point.date,
                value,
            }
        })
        .collect()
}

/// Extends the snapshot history `months_ahead` months past its last date
/// along a least-squares line.
pub fn forecast_trend(
    portfolio_id: &str,
    snapshots: &[Snapshot],
    months_ahead: u32,
    window: usize,
) -> TrendForecast {
    let mut actual: Vec<ForecastPoint> = snapshots
        .iter()
        .map(|s| ForecastPoint {
            date: s.snapshot_date,
            value: s.total_value,
        })
        .collect();
    actual.sort_by_key(|p| p.date);

    let Some(last) = actual.last().copied() else {
        return TrendForecast {
            portfolio_id: portfolio_id.to_string(),
            actual,
            forecast: Vec::new(),
            moving_average: Vec::new(),
            narrative: NOT_ENOUGH_DATA.to_string(),
        };
    };

    let values: Vec<Decimal> = actual.iter().map(|p| p.value).collect();
    let fit = fit_line(&values).unwrap_or_else(|| {
        warn!(
            "Trend fit overflowed for portfolio {}. Holding the last value flat.",
            portfolio_id
        );
        LinearFit {
            slope: Decimal::ZERO,
            intercept: last.value,
        }
    });

    let last_index = actual.len() - 1;
    let forecast = (1..=months_ahead)
        .map(|i| {
            let index = Decimal::from(last_index) + Decimal::from(i);
            ForecastPoint {
                date: add_months(last.date, i),
                value: round_money(fit.value_at(index).unwrap_or(last.value)),
            }
        })
        .collect();

    let narrative = if fit.slope >= Decimal::ZERO {
        UPWARD_TREND
    } else {
        DOWNWARD_TREND
    };

    TrendForecast {
        portfolio_id: portfolio_id.to_string(),
        moving_average: moving_average(&actual, window),
        actual,
        forecast,
        narrative: narrative.to_string(),
    }
}
