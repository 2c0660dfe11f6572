mod holdings_model;

pub use holdings_model::*;

#[cfg(test)]
mod holdings_model_tests;
