use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One dated value on a projected or recorded series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Projection of a portfolio's current value toward a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalForecast {
    pub goal_id: String,
    pub portfolio_id: String,
    pub current_value: Decimal,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
    pub expected_annual_return: Decimal,
    /// Value at the target date with no further contributions.
    pub projected_value: Decimal,
    /// Constant monthly contribution that reaches the target, in cents.
    pub required_monthly_contribution: Decimal,
    pub months_remaining: u32,
    pub on_track: bool,
    pub narrative: String,
    pub trajectory: Vec<ForecastPoint>,
}

/// Ad-hoc projection parameters. Every field is optional; see
/// [`resolve_months`](super::resolve_months) for how the horizon is chosen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfRequest {
    pub monthly_contribution: Option<Decimal>,
    pub expected_annual_return: Option<Decimal>,
    pub months: Option<i32>,
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfResult {
    pub starting_value: Decimal,
    pub projected_value: Decimal,
    pub months: u32,
    pub expected_annual_return: Decimal,
    pub monthly_contribution: Decimal,
    pub trajectory: Vec<ForecastPoint>,
    pub narrative: String,
    pub end_date: NaiveDate,
}

/// Linear-trend extrapolation of a portfolio's snapshot history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendForecast {
    pub portfolio_id: String,
    pub actual: Vec<ForecastPoint>,
    pub forecast: Vec<ForecastPoint>,
    pub moving_average: Vec<ForecastPoint>,
    pub narrative: String,
}
