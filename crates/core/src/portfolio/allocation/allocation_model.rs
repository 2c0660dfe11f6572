//! Allocation models for portfolio breakdown by asset type.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Asset-type label → amount (value, percentage or drift). No ordering is implied.
pub type AllocationMap = HashMap<String, Decimal>;

/// Declared target share of the portfolio for one asset type.
///
/// Targets across a portfolio are not required to sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TargetAllocation {
    pub id: String,
    pub portfolio_id: String,
    pub asset_type: Option<String>,
    /// Target percentage, 0-100
    pub target_percentage: Option<Decimal>,
}

impl TargetAllocation {
    pub fn validate(&self) -> Result<()> {
        match self.asset_type.as_deref() {
            Some(label) if !label.trim().is_empty() => {}
            _ => {
                return Err(Error::Validation(ValidationError::MissingField(
                    "assetType".to_string(),
                )))
            }
        }
        let Some(percentage) = self.target_percentage else {
            return Err(Error::Validation(ValidationError::MissingField(
                "targetPercentage".to_string(),
            )));
        };
        if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target percent must be between 0 and 100".to_string(),
            )));
        }
        Ok(())
    }
}

/// Allocation breakdown by asset type together with drift from targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetTypeAllocations {
    /// Summed market value per asset type
    pub values: AllocationMap,
    /// Share of total market value per asset type, 2 places; empty when the total is zero
    pub percentages: AllocationMap,
    /// Actual minus target percentage, keyed by the targets
    pub drift: AllocationMap,
}
