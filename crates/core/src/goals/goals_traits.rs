use crate::errors::Result;
use crate::goals::goals_model::Goal;

/// Trait for goal repository operations
pub trait GoalRepositoryTrait: Send + Sync {
    /// Returns `Error::NotFound` when the goal does not exist.
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    fn list_goals(&self, portfolio_id: &str) -> Result<Vec<Goal>>;
}
