//! ForecastEngine: monthly compounding, goal and what-if projections, and
//! trend extrapolation over snapshot history.

mod forecast_calculator;
mod forecast_model;
mod forecast_service;
mod projection;
mod trend;

pub use forecast_calculator::*;
pub use forecast_model::*;
pub use forecast_service::*;
pub use projection::*;
pub use trend::*;
