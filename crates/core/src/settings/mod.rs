//! Engine configuration: forecast defaults, snapshot currency and the
//! timezone that defines "today".

mod settings_loader;
mod settings_model;

pub use settings_model::*;
