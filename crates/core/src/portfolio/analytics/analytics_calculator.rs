use std::collections::HashSet;

use crate::portfolio::allocation::{calculate_allocations, TargetAllocation};
use crate::portfolio::holdings::{Holding, HoldingDetail};
use crate::portfolio::valuation::{calculate_totals, total_market_value};
use crate::portfolio::Portfolio;

use super::{AnalyticsSummary, PortfolioDashboard};

/// Valuation totals, allocation and target drift for one set of holdings.
pub fn summarize_portfolio(holdings: &[Holding], targets: &[TargetAllocation]) -> AnalyticsSummary {
    let totals = calculate_totals(holdings);
    let allocations = calculate_allocations(holdings, targets);
    AnalyticsSummary {
        total_market_value: totals.total_market_value,
        total_cost: totals.total_cost,
        total_gain_loss: totals.total_gain_loss,
        allocation_values: allocations.values,
        allocation_percentages: allocations.percentages,
        target_drift: allocations.drift,
    }
}

pub fn build_dashboard(portfolio: &Portfolio, holdings: &[Holding]) -> PortfolioDashboard {
    let total_value = total_market_value(holdings);
    PortfolioDashboard {
        portfolio_id: portfolio.id.clone(),
        portfolio_name: portfolio.name.clone(),
        base_currency: portfolio.base_currency.clone(),
        total_value,
        holdings: holdings
            .iter()
            .map(|h| HoldingDetail::from_holding(h, total_value))
            .collect(),
        created_at: portfolio.created_at,
    }
}

/// Distinct asset types in first-seen order. Untyped holdings are ignored;
/// unpriced ones still count.
pub fn list_asset_types(holdings: &[Holding]) -> Vec<String> {
    let mut seen = HashSet::new();
    holdings
        .iter()
        .filter_map(|h| h.asset_type.as_deref())
        .filter(|label| seen.insert(*label))
        .map(str::to_string)
        .collect()
}
