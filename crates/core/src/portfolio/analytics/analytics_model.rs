use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::allocation::AllocationMap;
use crate::portfolio::holdings::HoldingDetail;

/// Point-in-time valuation and allocation summary of a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_market_value: Decimal,
    pub total_cost: Decimal,
    pub total_gain_loss: Decimal,
    pub allocation_values: AllocationMap,
    pub allocation_percentages: AllocationMap,
    pub target_drift: AllocationMap,
}

/// Portfolio header plus per-holding detail rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDashboard {
    pub portfolio_id: String,
    pub portfolio_name: String,
    pub base_currency: String,
    pub total_value: Decimal,
    pub holdings: Vec<HoldingDetail>,
    pub created_at: Option<NaiveDateTime>,
}
