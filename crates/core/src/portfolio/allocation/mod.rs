//! Asset-type allocation and target drift.

mod allocation_calculator;
mod allocation_model;

pub use allocation_calculator::*;
pub use allocation_model::*;

#[cfg(test)]
mod allocation_calculator_tests;
