//! Portfolio analytics: summary bundle, dashboard and the service facade
//! over the portfolio repository.

mod analytics_calculator;
mod analytics_model;
mod analytics_service;

pub use analytics_calculator::*;
pub use analytics_model::*;
pub use analytics_service::*;
