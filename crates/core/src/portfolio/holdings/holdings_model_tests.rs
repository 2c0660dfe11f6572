use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn holding(quantity: Option<Decimal>, cost: Option<Decimal>, price: Option<Decimal>) -> Holding {
    Holding {
        id: "h1".to_string(),
        portfolio_id: "p1".to_string(),
        asset_name: "Acme Corp".to_string(),
        asset_type: Some("STOCK".to_string()),
        quantity,
        purchase_price: cost,
        current_price: price,
        currency: "INR".to_string(),
        purchase_date: None,
    }
}

#[test]
fn test_market_value_and_cost_basis() {
    let h = holding(Some(dec!(10)), Some(dec!(100)), Some(dec!(150)));
    assert_eq!(h.market_value(), Some(dec!(1500)));
    assert_eq!(h.cost_basis(), Some(dec!(1000)));
}

#[test]
fn test_missing_fields_yield_none() {
    assert_eq!(holding(None, Some(dec!(1)), Some(dec!(1))).market_value(), None);
    assert_eq!(holding(Some(dec!(1)), Some(dec!(1)), None).market_value(), None);
    assert_eq!(holding(Some(dec!(1)), None, Some(dec!(1))).cost_basis(), None);
    // priced for market value but not for cost
    let h = holding(Some(dec!(2)), None, Some(dec!(5)));
    assert_eq!(h.market_value(), Some(dec!(10)));
    assert_eq!(h.cost_basis(), None);
}

#[test]
fn test_validate() {
    assert!(holding(Some(dec!(1)), Some(dec!(1)), Some(dec!(1))).validate().is_ok());
    assert!(holding(None, None, None).validate().is_ok());
    assert!(holding(Some(dec!(-1)), None, None).validate().is_err());
    assert!(holding(Some(dec!(1)), None, Some(dec!(-0.01))).validate().is_err());

    let mut unnamed = holding(None, None, None);
    unnamed.asset_name = "  ".to_string();
    assert!(unnamed.validate().is_err());
}

#[test]
fn test_holding_detail_computes_gain_and_allocation() {
    let h = holding(Some(dec!(10)), Some(dec!(100)), Some(dec!(150)));
    let detail = HoldingDetail::from_holding(&h, dec!(2600));

    assert_eq!(detail.total_invested, Some(dec!(1000)));
    assert_eq!(detail.current_value, Some(dec!(1500)));
    assert_eq!(detail.gain_loss, Some(dec!(500)));
    assert_eq!(detail.gain_loss_percentage, Some(dec!(50)));
    // 1500 / 2600 = 0.5769 at four places
    assert_eq!(detail.allocation, dec!(57.69));
}

#[test]
fn test_holding_detail_zero_total_and_zero_cost() {
    let h = holding(Some(dec!(3)), Some(dec!(0)), Some(dec!(7)));
    let detail = HoldingDetail::from_holding(&h, Decimal::ZERO);
    assert_eq!(detail.allocation, Decimal::ZERO);
    assert_eq!(detail.gain_loss, Some(dec!(21)));
    assert_eq!(detail.gain_loss_percentage, Some(Decimal::ZERO));
}

#[test]
fn test_holding_detail_unpriced() {
    let h = holding(Some(dec!(3)), Some(dec!(10)), None);
    let detail = HoldingDetail::from_holding(&h, dec!(1000));
    assert_eq!(detail.current_value, None);
    assert_eq!(detail.gain_loss, None);
    assert_eq!(detail.gain_loss_percentage, None);
    assert_eq!(detail.allocation, Decimal::ZERO);
    assert_eq!(detail.total_invested, Some(dec!(30)));
}

#[test]
fn test_holding_serializes_camel_case() {
    let h = holding(Some(dec!(1)), None, None);
    let json = serde_json::to_value(&h).unwrap();
    assert!(json.get("assetName").is_some());
    assert!(json.get("purchasePrice").is_some());
    assert!(json.get("portfolioId").is_some());
}

#[test]
fn test_overflowing_product_is_unpriced() {
    let huge = dec!(1000000000000000);
    let h = holding(Some(huge), Some(huge), Some(huge));
    assert_eq!(h.market_value(), None);
    assert_eq!(h.cost_basis(), None);

    let detail = HoldingDetail::from_holding(&h, dec!(100));
    assert_eq!(detail.current_value, None);
    assert_eq!(detail.gain_loss, None);
    assert_eq!(detail.allocation, Decimal::ZERO);
}
