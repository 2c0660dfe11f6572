//! Portfolio valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate valuation of a set of holdings, carried at full precision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValuationTotals {
    pub total_market_value: Decimal,
    pub total_cost: Decimal,
    pub total_gain_loss: Decimal,
}
