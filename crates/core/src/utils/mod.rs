pub mod decimal_utils;
pub mod time_utils;

pub use decimal_utils::*;
pub use time_utils::*;
