use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ANNUAL_RETURN, DEFAULT_CURRENCY, DEFAULT_HORIZON_MONTHS,
    DEFAULT_MOVING_AVERAGE_WINDOW, DEFAULT_TIMEZONE,
};
use crate::errors::{Error, Result};
use crate::utils::SystemClock;

/// Settings consumed by the analytics and forecast services.
///
/// Passed explicitly into each service; nothing here is read from global state
/// after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// Annual return percentage assumed when a goal or what-if omits one
    pub default_annual_return: Decimal,
    /// Horizon for what-if runs that give neither months nor a target date
    pub default_horizon_months: u32,
    /// Currency label for captured snapshots
    pub default_currency: String,
    /// Trailing window of the snapshot moving average
    pub moving_average_window: usize,
    /// IANA timezone name used to derive today's date
    pub timezone: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_annual_return: DEFAULT_ANNUAL_RETURN,
            default_horizon_months: DEFAULT_HORIZON_MONTHS,
            default_currency: DEFAULT_CURRENCY.to_string(),
            moving_average_window: DEFAULT_MOVING_AVERAGE_WINDOW,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl EngineSettings {
    pub fn validate(&self) -> Result<()> {
        if self.default_horizon_months == 0 {
            return Err(Error::InvalidConfigValue(
                "defaultHorizonMonths must be positive".to_string(),
            ));
        }
        if self.moving_average_window == 0 {
            return Err(Error::InvalidConfigValue(
                "movingAverageWindow must be at least 1".to_string(),
            ));
        }
        if self.default_currency.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "defaultCurrency cannot be empty".to_string(),
            ));
        }
        self.tz()?;
        Ok(())
    }

    /// Parses the configured timezone.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone.parse::<Tz>().map_err(|_| {
            Error::InvalidConfigValue(format!("Unknown timezone '{}'", self.timezone))
        })
    }

    /// System clock reading dates in the configured timezone.
    pub fn clock(&self) -> Result<SystemClock> {
        Ok(SystemClock::new(self.tz()?))
    }
}
