use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::constants::RATIO_DIVISION_SCALE;
use crate::portfolio::Portfolio;
use crate::utils::{ratio_percent, round_percent};

use super::{Snapshot, TimelineEntry, ValueDriftStory};

/// Builds the value-drift story of a portfolio from its snapshot history.
///
/// Snapshots may arrive in any order; they are read oldest first. With no
/// history, a single synthetic point holding `current_value` is placed at the
/// portfolio's creation date (or `today` if unknown), and the latest date is
/// `today`.
pub fn build_value_drift_story(
    portfolio: &Portfolio,
    snapshots: &[Snapshot],
    current_value: Decimal,
    today: NaiveDate,
) -> ValueDriftStory {
    let mut points: Vec<(NaiveDate, Decimal)> = snapshots
        .iter()
        .map(|s| (s.snapshot_date, s.total_value))
        .collect();
    points.sort_by_key(|(date, _)| *date);

    let (initial_date, latest_date) = match (points.first(), points.last()) {
        (Some((first, _)), Some((last, _))) => (*first, *last),
        _ => {
            let fallback_date = portfolio
                .created_at
                .map(|created| created.date())
                .unwrap_or(today);
            debug!(
                "Portfolio {} has no snapshots. Using current value {} from {}.",
                portfolio.id, current_value, fallback_date
            );
            points.push((fallback_date, current_value));
            (fallback_date, today)
        }
    };

    let initial_value = points.first().map(|(_, v)| *v).unwrap_or(current_value);
    let latest_value = points.last().map(|(_, v)| *v).unwrap_or(current_value);

    let drift_value = latest_value.saturating_sub(initial_value);
    let drift_percent = ratio_percent(drift_value, initial_value, RATIO_DIVISION_SCALE);

    let timeline = points
        .iter()
        .map(|(date, total_value)| {
            let delta = total_value.saturating_sub(initial_value);
            let percent = ratio_percent(delta, initial_value, RATIO_DIVISION_SCALE);
            let story = if percent >= Decimal::ZERO {
                "The portfolio is at or above its starting value."
            } else {
                "The portfolio has slipped below its starting value."
            };
            TimelineEntry {
                date: *date,
                total_value: *total_value,
                drift_from_start: delta,
                drift_percent_from_start: percent,
                story: story.to_string(),
            }
        })
        .collect();

    let narrative = format!(
        "Since {}, your portfolio moved from {} to {}, a drift of {}%.",
        initial_date,
        initial_value,
        latest_value,
        round_percent(drift_percent)
    );

    ValueDriftStory {
        portfolio_id: portfolio.id.clone(),
        portfolio_name: portfolio.name.clone(),
        base_currency: portfolio.base_currency.clone(),
        initial_value,
        latest_value,
        drift_value,
        drift_percent,
        initial_date,
        latest_date,
        narrative,
        timeline,
    }
}
