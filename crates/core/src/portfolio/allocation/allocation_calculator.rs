//! Groups holdings by asset type and measures drift from declared targets.

use log::debug;
use rust_decimal::Decimal;

use crate::constants::ALLOCATION_DIVISION_SCALE;
use crate::portfolio::holdings::Holding;
use crate::portfolio::valuation::total_market_value;
use crate::utils::{ratio_percent, round_percent};

use super::{AllocationMap, AssetTypeAllocations, TargetAllocation};

/// Summed market value per asset type.
///
/// Holdings without an asset type, or without a quantity/current price, are
/// left out entirely, so the key set is exactly the distinct asset types of
/// priced holdings.
pub fn allocation_values(holdings: &[Holding]) -> AllocationMap {
    let mut values = AllocationMap::new();
    for holding in holdings {
        let Some(asset_type) = holding.asset_type.as_deref() else {
            continue;
        };
        let Some(market_value) = holding.market_value() else {
            continue;
        };
        let entry = values
            .entry(asset_type.to_string())
            .or_insert(Decimal::ZERO);
        *entry = entry.saturating_add(market_value);
    }
    values
}

/// Percentage of total market value per asset type.
///
/// Each share is `value / total` rounded half-up to 6 places, times 100,
/// rounded half-up to 2 places. Returns an empty map when the total is zero.
pub fn allocation_percentages(holdings: &[Holding]) -> AllocationMap {
    let total_value = total_market_value(holdings);
    percentages_of(allocation_values(holdings), total_value)
}

/// Actual minus target percentage for every usable target.
///
/// Targets missing an asset type or a percentage are skipped. An asset type
/// with a target but no holdings counts as 0% actual. Asset types that are
/// held but have no target get no entry.
pub fn target_drift(holdings: &[Holding], targets: &[TargetAllocation]) -> AllocationMap {
    drift_from(&allocation_percentages(holdings), targets)
}

/// Values, percentages and drift computed together.
pub fn calculate_allocations(
    holdings: &[Holding],
    targets: &[TargetAllocation],
) -> AssetTypeAllocations {
    let total_value = total_market_value(holdings);
    let values = allocation_values(holdings);
    let percentages = percentages_of(values.clone(), total_value);
    let drift = drift_from(&percentages, targets);
    AssetTypeAllocations {
        values,
        percentages,
        drift,
    }
}

fn percentages_of(values: AllocationMap, total_value: Decimal) -> AllocationMap {
    if total_value.is_zero() {
        debug!("Portfolio has no market value. Allocation percentages are undefined.");
        return AllocationMap::new();
    }
    values
        .into_iter()
        .map(|(asset_type, value)| {
            let percentage = round_percent(ratio_percent(
                value,
                total_value,
                ALLOCATION_DIVISION_SCALE,
            ));
            (asset_type, percentage)
        })
        .collect()
}

fn drift_from(percentages: &AllocationMap, targets: &[TargetAllocation]) -> AllocationMap {
    let mut drift = AllocationMap::new();
    for target in targets {
        let (Some(asset_type), Some(target_percentage)) =
            (target.asset_type.as_deref(), target.target_percentage)
        else {
            debug!("Skipping incomplete allocation target {}", target.id);
            continue;
        };
        let actual = percentages
            .get(asset_type)
            .copied()
            .unwrap_or(Decimal::ZERO);
        drift.insert(
            asset_type.to_string(),
            round_percent(actual).saturating_sub(round_percent(target_percentage)),
        );
    }
    drift
}
