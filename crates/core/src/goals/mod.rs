//! Goals module - domain model and repository seam.

mod goals_model;
mod goals_traits;

pub use goals_model::Goal;
pub use goals_traits::GoalRepositoryTrait;
