use super::*;
use crate::portfolio::holdings::Holding;
use crate::portfolio::valuation::total_market_value;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn priced(asset_type: Option<&str>, qty: Decimal, price: Decimal) -> Holding {
    Holding {
        id: format!("{:?}-{}", asset_type, qty),
        portfolio_id: "p1".to_string(),
        asset_name: "Asset".to_string(),
        asset_type: asset_type.map(str::to_string),
        quantity: Some(qty),
        purchase_price: Some(price),
        current_price: Some(price),
        currency: "INR".to_string(),
        purchase_date: None,
    }
}

fn target(asset_type: Option<&str>, percentage: Option<Decimal>) -> TargetAllocation {
    TargetAllocation {
        id: format!("t-{:?}", asset_type),
        portfolio_id: "p1".to_string(),
        asset_type: asset_type.map(str::to_string),
        target_percentage: percentage,
    }
}

fn scenario_a() -> Vec<Holding> {
    let mut stock = priced(Some("STOCK"), dec!(10), dec!(150));
    stock.purchase_price = Some(dec!(100));
    let mut bond = priced(Some("BOND"), dec!(20), dec!(55));
    bond.purchase_price = Some(dec!(50));
    vec![stock, bond]
}

// ==================== Values ====================

#[test]
fn test_allocation_values_scenario_a() {
    let values = allocation_values(&scenario_a());
    assert_eq!(values.len(), 2);
    assert_eq!(values["STOCK"], dec!(1500));
    assert_eq!(values["BOND"], dec!(1100));
}

#[test]
fn test_allocation_values_merges_same_type() {
    let holdings = vec![
        priced(Some("STOCK"), dec!(1), dec!(100)),
        priced(Some("STOCK"), dec!(2), dec!(50)),
        priced(Some("CASH"), dec!(1), dec!(5)),
    ];
    let values = allocation_values(&holdings);
    assert_eq!(values["STOCK"], dec!(200));
    assert_eq!(values["CASH"], dec!(5));
}

#[test]
fn test_allocation_values_excludes_untyped_and_unpriced() {
    let mut unpriced = priced(Some("CRYPTO"), dec!(3), dec!(10));
    unpriced.current_price = None;
    let holdings = vec![
        priced(None, dec!(5), dec!(10)),
        unpriced,
        priced(Some("BOND"), dec!(1), dec!(10)),
    ];
    let values = allocation_values(&holdings);
    assert_eq!(values.len(), 1);
    assert!(!values.contains_key("CRYPTO"));
    assert_eq!(values["BOND"], dec!(10));
}

#[test]
fn test_allocation_values_sum_to_total_for_typed_holdings() {
    let holdings = scenario_a();
    let sum: Decimal = allocation_values(&holdings).values().copied().sum();
    assert_eq!(sum, total_market_value(&holdings));
}

// ==================== Percentages ====================

#[test]
fn test_allocation_percentages_scenario_a() {
    let percentages = allocation_percentages(&scenario_a());
    assert_eq!(percentages["STOCK"], dec!(57.69));
    assert_eq!(percentages["BOND"], dec!(42.31));
}

#[test]
fn test_allocation_percentages_empty_when_total_zero() {
    assert!(allocation_percentages(&[]).is_empty());

    let holdings = vec![
        priced(Some("STOCK"), dec!(0), dec!(100)),
        priced(Some("BOND"), dec!(10), dec!(0)),
    ];
    // values exist (both zero) but percentages are undefined
    assert_eq!(allocation_values(&holdings).len(), 2);
    assert!(allocation_percentages(&holdings).is_empty());
}

#[test]
fn test_allocation_percentages_untyped_value_still_in_denominator() {
    let holdings = vec![
        priced(Some("STOCK"), dec!(1), dec!(75)),
        priced(None, dec!(1), dec!(25)),
    ];
    let percentages = allocation_percentages(&holdings);
    assert_eq!(percentages.len(), 1);
    assert_eq!(percentages["STOCK"], dec!(75));
}

#[test]
fn test_allocation_percentages_thirds() {
    let holdings = vec![
        priced(Some("A"), dec!(1), dec!(1)),
        priced(Some("B"), dec!(1), dec!(1)),
        priced(Some("C"), dec!(1), dec!(1)),
    ];
    let percentages = allocation_percentages(&holdings);
    for label in ["A", "B", "C"] {
        assert_eq!(percentages[label], dec!(33.33));
    }
}

#[test]
fn test_allocation_percentages_rounds_half_up() {
    // 797 / 800 = 0.99625 -> 99.625, which half-even would round down
    let holdings = vec![
        priced(Some("A"), dec!(3), dec!(1)),
        priced(Some("B"), dec!(797), dec!(1)),
    ];
    let percentages = allocation_percentages(&holdings);
    assert_eq!(percentages["A"], dec!(0.38));
    assert_eq!(percentages["B"], dec!(99.63));
}

// ==================== Drift ====================

#[test]
fn test_target_drift_scenario_b() {
    let targets = vec![
        target(Some("STOCK"), Some(dec!(60))),
        target(Some("BOND"), Some(dec!(40))),
    ];
    let drift = target_drift(&scenario_a(), &targets);
    assert_eq!(drift.len(), 2);
    assert_eq!(drift["STOCK"], dec!(-2.31));
    assert_eq!(drift["BOND"], dec!(2.31));
}

#[test]
fn test_target_drift_even_split() {
    let holdings = vec![
        priced(Some("STOCK"), dec!(6), dec!(100)),
        priced(Some("BOND"), dec!(4), dec!(100)),
    ];
    let targets = vec![
        target(Some("STOCK"), Some(dec!(60))),
        target(Some("BOND"), Some(dec!(40))),
    ];
    let drift = target_drift(&holdings, &targets);
    assert_eq!(drift["STOCK"], Decimal::ZERO);
    assert_eq!(drift["BOND"], Decimal::ZERO);
}

#[test]
fn test_target_drift_keyed_by_targets() {
    let targets = vec![
        target(Some("STOCK"), Some(dec!(50))),
        target(Some("GOLD"), Some(dec!(10))),
        target(None, Some(dec!(20))),
        target(Some("CASH"), None),
    ];
    let drift = target_drift(&scenario_a(), &targets);

    assert_eq!(drift.len(), 2);
    assert_eq!(drift["STOCK"], dec!(7.69));
    // targeted but not held
    assert_eq!(drift["GOLD"], dec!(-10));
    // held but not targeted
    assert!(!drift.contains_key("BOND"));
}

#[test]
fn test_target_drift_rounds_target_to_cents() {
    let targets = vec![target(Some("STOCK"), Some(dec!(57.685)))];
    let drift = target_drift(&scenario_a(), &targets);
    assert_eq!(drift["STOCK"], dec!(57.69) - dec!(57.69));
}

#[test]
fn test_target_drift_with_zero_value_portfolio() {
    let targets = vec![target(Some("STOCK"), Some(dec!(100)))];
    let drift = target_drift(&[], &targets);
    assert_eq!(drift["STOCK"], dec!(-100));
}

#[test]
fn test_calculate_allocations_matches_individual_functions() {
    let holdings = scenario_a();
    let targets = vec![target(Some("STOCK"), Some(dec!(60)))];
    let allocations = calculate_allocations(&holdings, &targets);
    assert_eq!(allocations.values, allocation_values(&holdings));
    assert_eq!(allocations.percentages, allocation_percentages(&holdings));
    assert_eq!(allocations.drift, target_drift(&holdings, &targets));
}

// ==================== Target validation ====================

#[test]
fn test_target_validate() {
    assert!(target(Some("STOCK"), Some(dec!(60))).validate().is_ok());
    assert!(target(Some("STOCK"), Some(dec!(0))).validate().is_ok());
    assert!(target(Some("STOCK"), Some(dec!(100))).validate().is_ok());
    assert!(target(Some("STOCK"), Some(dec!(100.01))).validate().is_err());
    assert!(target(Some("STOCK"), Some(dec!(-1))).validate().is_err());
    assert!(target(None, Some(dec!(10))).validate().is_err());
    assert!(target(Some(" "), Some(dec!(10))).validate().is_err());
    assert!(target(Some("STOCK"), None).validate().is_err());
}

#[test]
fn test_allocation_values_saturate() {
    let holdings = vec![
        priced(Some("STOCK"), Decimal::ONE, Decimal::MAX),
        priced(Some("STOCK"), Decimal::ONE, Decimal::MAX),
    ];
    assert_eq!(allocation_values(&holdings)["STOCK"], Decimal::MAX);
}

#[test]
fn test_target_drift_saturates_on_extreme_target() {
    let holdings = vec![priced(Some("X"), Decimal::ONE, Decimal::ONE)];
    let drift = target_drift(&holdings, &[target(Some("X"), Some(Decimal::MIN))]);
    assert_eq!(drift["X"], Decimal::MAX);
}
