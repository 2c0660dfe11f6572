use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::RATIO_DIVISION_SCALE;
use crate::errors::{Error, Result, ValidationError};
use crate::utils::ratio_percent;

/// One position within a portfolio.
///
/// Quantity and prices are optional: a holding that has not been priced yet
/// is carried through unchanged and simply contributes nothing to aggregates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub portfolio_id: String,
    pub asset_name: String,
    /// Asset class label, e.g. "STOCK", "BOND"
    pub asset_type: Option<String>,
    pub quantity: Option<Decimal>,
    pub purchase_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
    /// Currency label only; no conversion is ever applied
    pub currency: String,
    pub purchase_date: Option<NaiveDate>,
}

impl Holding {
    /// `quantity × current_price`, or `None` when either is missing or the
    /// product overflows.
    pub fn market_value(&self) -> Option<Decimal> {
        self.priced_amount(self.current_price?)
    }

    /// `quantity × purchase_price`, with the same skip rule as
    /// [`market_value`](Self::market_value).
    pub fn cost_basis(&self) -> Option<Decimal> {
        self.priced_amount(self.purchase_price?)
    }

    fn priced_amount(&self, price: Decimal) -> Option<Decimal> {
        let quantity = self.quantity?;
        let amount = quantity.checked_mul(price);
        if amount.is_none() {
            debug!(
                "Holding {}: {} × {} overflows. Treated as unpriced.",
                self.id, quantity, price
            );
        }
        amount
    }

    /// Boundary-layer validation. The engines never call this; they skip
    /// unpriced holdings instead of rejecting them.
    pub fn validate(&self) -> Result<()> {
        if self.asset_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "assetName".to_string(),
            )));
        }
        if self.quantity.is_some_and(|q| q < Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Quantity cannot be negative".to_string(),
            )));
        }
        for (field, price) in [
            ("purchasePrice", self.purchase_price),
            ("currentPrice", self.current_price),
        ] {
            if price.is_some_and(|p| p < Decimal::ZERO) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "{} cannot be negative",
                    field
                ))));
            }
        }
        Ok(())
    }
}

/// Display row for a single holding on the portfolio dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingDetail {
    pub holding_id: String,
    pub asset_name: String,
    pub asset_type: Option<String>,
    pub quantity: Option<Decimal>,
    pub purchase_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub currency: String,
    pub purchase_date: Option<NaiveDate>,
    /// Cost basis; `None` when unpriced
    pub total_invested: Option<Decimal>,
    /// Market value; `None` when unpriced
    pub current_value: Option<Decimal>,
    pub gain_loss: Option<Decimal>,
    /// Gain over cost in percent (4-place ratio × 100); zero when nothing was invested
    pub gain_loss_percentage: Option<Decimal>,
    /// Share of the portfolio total in percent (4-place ratio × 100)
    pub allocation: Decimal,
}

impl HoldingDetail {
    pub fn from_holding(holding: &Holding, portfolio_total: Decimal) -> Self {
        let total_invested = holding.cost_basis();
        let current_value = holding.market_value();

        let gain_loss = match (current_value, total_invested) {
            (Some(value), Some(cost)) => Some(value.saturating_sub(cost)),
            _ => None,
        };
        let gain_loss_percentage = match (gain_loss, total_invested) {
            (Some(gain), Some(cost)) => Some(ratio_percent(gain, cost, RATIO_DIVISION_SCALE)),
            _ => None,
        };

        let allocation = match current_value {
            Some(value) if portfolio_total > Decimal::ZERO => {
                ratio_percent(value, portfolio_total, RATIO_DIVISION_SCALE)
            }
            _ => Decimal::ZERO,
        };

        Self {
            holding_id: holding.id.clone(),
            asset_name: holding.asset_name.clone(),
            asset_type: holding.asset_type.clone(),
            quantity: holding.quantity,
            purchase_price: holding.purchase_price,
            current_price: holding.current_price,
            currency: holding.currency.clone(),
            purchase_date: holding.purchase_date,
            total_invested,
            current_value,
            gain_loss,
            gain_loss_percentage,
            allocation,
        }
    }
}
