use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::portfolio::allocation::{
    allocation_percentages, allocation_values, target_drift, AllocationMap,
};
use crate::portfolio::snapshot::{
    build_value_drift_story, NewSnapshot, Snapshot, ValueDriftStory,
};
use crate::portfolio::valuation::{calculate_totals, total_market_value, ValuationTotals};
use crate::portfolio::PortfolioRepositoryTrait;
use crate::settings::EngineSettings;
use crate::utils::Clock;

use super::{
    build_dashboard, list_asset_types, summarize_portfolio, AnalyticsSummary, PortfolioDashboard,
};

/// Trait for the portfolio analytics service.
pub trait AnalyticsServiceTrait: Send + Sync {
    fn get_valuation(&self, portfolio_id: &str) -> Result<ValuationTotals>;

    fn get_total_value(&self, portfolio_id: &str) -> Result<Decimal>;

    fn get_allocation_values(&self, portfolio_id: &str) -> Result<AllocationMap>;

    fn get_allocation_percentages(&self, portfolio_id: &str) -> Result<AllocationMap>;

    fn get_target_drift(&self, portfolio_id: &str) -> Result<AllocationMap>;

    fn get_summary(&self, portfolio_id: &str) -> Result<AnalyticsSummary>;

    fn get_dashboard(&self, portfolio_id: &str) -> Result<PortfolioDashboard>;

    fn get_value_drift_story(&self, portfolio_id: &str) -> Result<ValueDriftStory>;

    fn list_asset_types(&self, portfolio_id: &str) -> Result<Vec<String>>;

    /// Records a snapshot of the current total value, then returns all
    /// snapshots newest first.
    fn refresh_snapshots(&self, portfolio_id: &str, currency: Option<&str>)
        -> Result<Vec<Snapshot>>;
}

/// Fetches portfolio records through the repository and hands them to the
/// valuation and allocation calculators.
pub struct AnalyticsService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
    settings: EngineSettings,
    clock: Arc<dyn Clock>,
}

impl AnalyticsService {
    pub fn new(
        repository: Arc<dyn PortfolioRepositoryTrait>,
        settings: EngineSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            settings,
            clock,
        }
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_valuation(&self, portfolio_id: &str) -> Result<ValuationTotals> {
        let holdings = self.repository.list_holdings(portfolio_id)?;
        Ok(calculate_totals(&holdings))
    }

    fn get_total_value(&self, portfolio_id: &str) -> Result<Decimal> {
        let holdings = self.repository.list_holdings(portfolio_id)?;
        Ok(total_market_value(&holdings))
    }

    fn get_allocation_values(&self, portfolio_id: &str) -> Result<AllocationMap> {
        let holdings = self.repository.list_holdings(portfolio_id)?;
        Ok(allocation_values(&holdings))
    }

    fn get_allocation_percentages(&self, portfolio_id: &str) -> Result<AllocationMap> {
        let holdings = self.repository.list_holdings(portfolio_id)?;
        Ok(allocation_percentages(&holdings))
    }

    fn get_target_drift(&self, portfolio_id: &str) -> Result<AllocationMap> {
        let holdings = self.repository.list_holdings(portfolio_id)?;
        let targets = self.repository.list_targets(portfolio_id)?;
        Ok(target_drift(&holdings, &targets))
    }

    fn get_summary(&self, portfolio_id: &str) -> Result<AnalyticsSummary> {
        debug!("Computing analytics summary for portfolio {}", portfolio_id);
        let holdings = self.repository.list_holdings(portfolio_id)?;
        let targets = self.repository.list_targets(portfolio_id)?;
        Ok(summarize_portfolio(&holdings, &targets))
    }

    fn get_dashboard(&self, portfolio_id: &str) -> Result<PortfolioDashboard> {
        let portfolio = self.repository.get_portfolio(portfolio_id)?;
        let holdings = self.repository.list_holdings(portfolio_id)?;
        Ok(build_dashboard(&portfolio, &holdings))
    }

    fn get_value_drift_story(&self, portfolio_id: &str) -> Result<ValueDriftStory> {
        let portfolio = self.repository.get_portfolio(portfolio_id)?;
        let snapshots = self.repository.list_snapshots(portfolio_id)?;
        let current_value = if snapshots.is_empty() {
            self.get_total_value(portfolio_id)?
        } else {
            Decimal::ZERO
        };
        Ok(build_value_drift_story(
            &portfolio,
            &snapshots,
            current_value,
            self.clock.today(),
        ))
    }

    fn list_asset_types(&self, portfolio_id: &str) -> Result<Vec<String>> {
        let holdings = self.repository.list_holdings(portfolio_id)?;
        Ok(list_asset_types(&holdings))
    }

    fn refresh_snapshots(
        &self,
        portfolio_id: &str,
        currency: Option<&str>,
    ) -> Result<Vec<Snapshot>> {
        let total_value = self.get_total_value(portfolio_id)?;
        let captured = NewSnapshot::capture(
            portfolio_id,
            total_value,
            currency,
            &self.settings.default_currency,
            self.clock.today(),
        );
        debug!(
            "Recording snapshot of {} {} for portfolio {}",
            captured.total_value, captured.currency, portfolio_id
        );
        self.repository.record_snapshot(captured)?;

        let mut snapshots = self.repository.list_snapshots(portfolio_id)?;
        snapshots.sort_by(|a, b| b.snapshot_date.cmp(&a.snapshot_date));
        Ok(snapshots)
    }
}
