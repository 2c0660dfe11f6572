use std::str::FromStr;

use log::debug;

use super::EngineSettings;
use crate::errors::{Error, Result};

pub const ENV_DEFAULT_ANNUAL_RETURN: &str = "PI_DEFAULT_ANNUAL_RETURN";
pub const ENV_DEFAULT_HORIZON_MONTHS: &str = "PI_DEFAULT_HORIZON_MONTHS";
pub const ENV_DEFAULT_CURRENCY: &str = "PI_DEFAULT_CURRENCY";
pub const ENV_MOVING_AVERAGE_WINDOW: &str = "PI_MOVING_AVERAGE_WINDOW";
pub const ENV_TIMEZONE: &str = "PI_TIMEZONE";

impl EngineSettings {
    /// Loads settings from the process environment (and a `.env` file if one
    /// exists), falling back to defaults for unset keys. A `.env` file that
    /// exists but cannot be read or parsed is an error.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment overrides from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(Error::ConfigIO(err.to_string())),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(value) = lookup(ENV_DEFAULT_ANNUAL_RETURN) {
            settings.default_annual_return = parse_value(ENV_DEFAULT_ANNUAL_RETURN, &value)?;
        }
        if let Some(value) = lookup(ENV_DEFAULT_HORIZON_MONTHS) {
            settings.default_horizon_months = parse_value(ENV_DEFAULT_HORIZON_MONTHS, &value)?;
        }
        if let Some(value) = lookup(ENV_DEFAULT_CURRENCY) {
            settings.default_currency = value.trim().to_uppercase();
        }
        if let Some(value) = lookup(ENV_MOVING_AVERAGE_WINDOW) {
            settings.moving_average_window = parse_value(ENV_MOVING_AVERAGE_WINDOW, &value)?;
        }
        if let Some(value) = lookup(ENV_TIMEZONE) {
            settings.timezone = value.trim().to_string();
        }

        settings.validate()?;
        debug!("Loaded engine settings: {:?}", settings);
        Ok(settings)
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| Error::InvalidConfigValue(format!("{}='{}'", key, raw)))
}
