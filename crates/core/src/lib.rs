//! Portfolio Insight Core - valuation, allocation and forecasting engine.
//!
//! The calculation engines are pure functions over decimal inputs. Storage
//! is reached only through the repository traits, which a host application
//! implements.

pub mod constants;
pub mod errors;
pub mod forecast;
pub mod goals;
pub mod portfolio;
pub mod settings;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
