use log::debug;
use rust_decimal::Decimal;

use crate::portfolio::holdings::Holding;
use crate::portfolio::valuation::ValuationTotals;

/// Sum of `quantity × current_price` over all holdings.
///
/// Holdings missing a quantity or a current price are skipped, not counted as
/// zero. The sum saturates at the `Decimal` bounds. The result is unrounded;
/// callers round for display.
pub fn total_market_value(holdings: &[Holding]) -> Decimal {
    holdings
        .iter()
        .filter_map(|holding| {
            let value = holding.market_value();
            if value.is_none() {
                debug!(
                    "Holding {} has no quantity or current price. Excluded from market value.",
                    holding.id
                );
            }
            value
        })
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sum of `quantity × purchase_price` over all holdings, with the same skip rule.
pub fn total_cost(holdings: &[Holding]) -> Decimal {
    holdings
        .iter()
        .filter_map(Holding::cost_basis)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Market value minus cost, derived from the two aggregates so that
/// `gain_loss == market_value - cost` holds exactly.
pub fn total_gain_loss(holdings: &[Holding]) -> Decimal {
    total_market_value(holdings).saturating_sub(total_cost(holdings))
}

/// Market value, cost and gain/loss together.
pub fn calculate_totals(holdings: &[Holding]) -> ValuationTotals {
    let total_market_value = total_market_value(holdings);
    let total_cost = total_cost(holdings);
    ValuationTotals {
        total_market_value,
        total_cost,
        total_gain_loss: total_market_value.saturating_sub(total_cost),
    }
}
