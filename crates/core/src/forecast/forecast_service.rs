use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::goals::GoalRepositoryTrait;
use crate::portfolio::valuation::total_market_value;
use crate::portfolio::PortfolioRepositoryTrait;
use crate::settings::EngineSettings;
use crate::utils::Clock;

use super::{
    forecast_goal, forecast_trend, run_what_if, GoalForecast, TrendForecast, WhatIfRequest,
    WhatIfResult,
};

/// Trait for forecast service operations
pub trait ForecastServiceTrait: Send + Sync {
    fn forecast_goal(&self, goal_id: &str) -> Result<GoalForecast>;

    /// Forecasts every goal of a portfolio against one valuation.
    fn forecast_goals(&self, portfolio_id: &str) -> Result<Vec<GoalForecast>>;

    fn run_what_if(&self, portfolio_id: &str, request: &WhatIfRequest) -> Result<WhatIfResult>;

    fn forecast_trend(&self, portfolio_id: &str, months_ahead: u32) -> Result<TrendForecast>;
}

pub struct ForecastService {
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    settings: EngineSettings,
    clock: Arc<dyn Clock>,
}

impl ForecastService {
    pub fn new(
        portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        settings: EngineSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            portfolio_repository,
            goal_repository,
            settings,
            clock,
        }
    }

    fn current_value(&self, portfolio_id: &str) -> Result<Decimal> {
        let holdings = self.portfolio_repository.list_holdings(portfolio_id)?;
        Ok(total_market_value(&holdings))
    }
}

impl ForecastServiceTrait for ForecastService {
    fn forecast_goal(&self, goal_id: &str) -> Result<GoalForecast> {
        let goal = self.goal_repository.get_goal(goal_id)?;
        let current_value = self.current_value(&goal.portfolio_id)?;
        Ok(forecast_goal(
            &goal,
            current_value,
            self.clock.today(),
            &self.settings,
        ))
    }

    fn forecast_goals(&self, portfolio_id: &str) -> Result<Vec<GoalForecast>> {
        let goals = self.goal_repository.list_goals(portfolio_id)?;
        if goals.is_empty() {
            return Ok(Vec::new());
        }
        let current_value = self.current_value(portfolio_id)?;
        let today = self.clock.today();
        debug!(
            "Forecasting {} goals for portfolio {} from {}",
            goals.len(),
            portfolio_id,
            current_value
        );
        Ok(goals
            .iter()
            .map(|goal| forecast_goal(goal, current_value, today, &self.settings))
            .collect())
    }

    fn run_what_if(&self, portfolio_id: &str, request: &WhatIfRequest) -> Result<WhatIfResult> {
        let current_value = self.current_value(portfolio_id)?;
        Ok(run_what_if(
            current_value,
            request,
            self.clock.today(),
            &self.settings,
        ))
    }

    fn forecast_trend(&self, portfolio_id: &str, months_ahead: u32) -> Result<TrendForecast> {
        let snapshots = self.portfolio_repository.list_snapshots(portfolio_id)?;
        Ok(forecast_trend(
            portfolio_id,
            &snapshots,
            months_ahead,
            self.settings.moving_average_window,
        ))
    }
}
