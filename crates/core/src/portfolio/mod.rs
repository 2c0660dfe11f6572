pub mod allocation;
pub mod analytics;
pub mod holdings;
pub mod snapshot;
pub mod valuation;

mod portfolio_model;
mod portfolio_traits;

pub use portfolio_model::*;
pub use portfolio_traits::*;
