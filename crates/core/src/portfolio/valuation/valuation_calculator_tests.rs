//! Tests for portfolio valuation aggregates.

#[cfg(test)]
mod tests {
    use crate::portfolio::holdings::Holding;
    use crate::portfolio::valuation::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn priced(id: &str, asset_type: &str, qty: Decimal, cost: Decimal, price: Decimal) -> Holding {
        Holding {
            id: id.to_string(),
            portfolio_id: "p1".to_string(),
            asset_name: format!("Asset {}", id),
            asset_type: Some(asset_type.to_string()),
            quantity: Some(qty),
            purchase_price: Some(cost),
            current_price: Some(price),
            currency: "INR".to_string(),
            purchase_date: None,
        }
    }

    fn scenario_a() -> Vec<Holding> {
        vec![
            priced("h1", "STOCK", dec!(10), dec!(100), dec!(150)),
            priced("h2", "BOND", dec!(20), dec!(50), dec!(55)),
        ]
    }

    #[test]
    fn test_scenario_a_totals() {
        let holdings = scenario_a();
        assert_eq!(total_market_value(&holdings), dec!(2600));
        assert_eq!(total_cost(&holdings), dec!(2000));
        assert_eq!(total_gain_loss(&holdings), dec!(600));
    }

    #[test]
    fn test_empty_holdings_are_zero() {
        assert_eq!(total_market_value(&[]), Decimal::ZERO);
        assert_eq!(total_cost(&[]), Decimal::ZERO);
        assert_eq!(total_gain_loss(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_unpriced_holdings_are_skipped() {
        let mut holdings = scenario_a();
        let mut no_quantity = priced("h3", "STOCK", dec!(1), dec!(10), dec!(10));
        no_quantity.quantity = None;
        let mut no_price = priced("h4", "CASH", dec!(5), dec!(1), dec!(1));
        no_price.current_price = None;
        holdings.push(no_quantity);
        holdings.push(no_price);

        assert_eq!(total_market_value(&holdings), dec!(2600));
        // h4 still has a purchase price, so it counts toward cost only
        assert_eq!(total_cost(&holdings), dec!(2005));
        assert_eq!(total_gain_loss(&holdings), dec!(595));
    }

    #[test]
    fn test_gain_loss_identity_with_partial_pricing() {
        let mut holdings = scenario_a();
        let mut cost_only = priced("h5", "GOLD", dec!(2), dec!(1000), dec!(0));
        cost_only.current_price = None;
        holdings.push(cost_only);

        let totals = calculate_totals(&holdings);
        assert_eq!(
            totals.total_gain_loss,
            totals.total_market_value - totals.total_cost
        );
        assert_eq!(totals.total_gain_loss, total_gain_loss(&holdings));
    }

    #[test]
    fn test_totals_keep_full_precision() {
        let holdings = vec![priced("h1", "STOCK", dec!(3.333), dec!(1.005), dec!(2.0075))];
        assert_eq!(total_market_value(&holdings), dec!(6.6909975));
        assert_eq!(total_cost(&holdings), dec!(3.349665));
    }

    #[test]
    fn test_order_independent() {
        let mut holdings = scenario_a();
        let forward = calculate_totals(&holdings);
        holdings.reverse();
        assert_eq!(calculate_totals(&holdings), forward);
    }

    #[test]
    fn test_overflowing_holding_is_skipped() {
        let huge = dec!(1000000000000000);
        let mut holdings = scenario_a();
        holdings.push(priced("h3", "STOCK", huge, huge, huge));

        let totals = calculate_totals(&holdings);
        assert_eq!(totals.total_market_value, dec!(2600));
        assert_eq!(totals.total_cost, dec!(2000));
        assert_eq!(totals.total_gain_loss, dec!(600));
    }

    #[test]
    fn test_totals_saturate_at_decimal_bounds() {
        let holdings = vec![
            priced("h1", "STOCK", Decimal::ONE, Decimal::ZERO, Decimal::MAX),
            priced("h2", "STOCK", Decimal::ONE, Decimal::ZERO, Decimal::MAX),
        ];
        assert_eq!(total_market_value(&holdings), Decimal::MAX);
        assert_eq!(total_gain_loss(&holdings), Decimal::MAX);
    }
}
