//! Snapshot models, snapshot capture and the value-drift story.

mod drift_story;
mod snapshot_model;

pub use drift_story::*;
pub use snapshot_model::*;
