use crate::errors::Result;
use crate::portfolio::allocation::TargetAllocation;
use crate::portfolio::holdings::Holding;
use crate::portfolio::snapshot::{NewSnapshot, Snapshot};
use crate::portfolio::Portfolio;

/// Read access to one portfolio's records, implemented by the storage layer.
///
/// Every list is scoped to a single portfolio and may come back in any order.
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Returns `Error::NotFound` when the portfolio does not exist.
    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;

    fn list_holdings(&self, portfolio_id: &str) -> Result<Vec<Holding>>;

    fn list_targets(&self, portfolio_id: &str) -> Result<Vec<TargetAllocation>>;

    fn list_snapshots(&self, portfolio_id: &str) -> Result<Vec<Snapshot>>;

    /// Persists a captured snapshot and returns the stored record.
    fn record_snapshot(&self, snapshot: NewSnapshot) -> Result<Snapshot>;
}
