use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recorded total value of a portfolio on a given date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,
    pub portfolio_id: String,
    pub total_value: Decimal,
    pub currency: String,
    pub snapshot_date: NaiveDate,
}

/// Snapshot captured by the engine, not yet persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSnapshot {
    pub portfolio_id: String,
    pub total_value: Decimal,
    pub currency: String,
    pub snapshot_date: NaiveDate,
}

impl NewSnapshot {
    /// Captures `total_value` as of `today`. A missing or blank currency falls
    /// back to `default_currency`.
    pub fn capture(
        portfolio_id: &str,
        total_value: Decimal,
        currency: Option<&str>,
        default_currency: &str,
        today: NaiveDate,
    ) -> Self {
        let currency = currency
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(default_currency);
        Self {
            portfolio_id: portfolio_id.to_string(),
            total_value,
            currency: currency.to_string(),
            snapshot_date: today,
        }
    }
}

/// One step of the value-drift timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub total_value: Decimal,
    pub drift_from_start: Decimal,
    pub drift_percent_from_start: Decimal,
    pub story: String,
}

/// How a portfolio's recorded value moved from its first snapshot to its latest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueDriftStory {
    pub portfolio_id: String,
    pub portfolio_name: String,
    pub base_currency: String,
    pub initial_value: Decimal,
    pub latest_value: Decimal,
    pub drift_value: Decimal,
    pub drift_percent: Decimal,
    pub initial_date: NaiveDate,
    pub latest_date: NaiveDate,
    pub narrative: String,
    pub timeline: Vec<TimelineEntry>,
}
