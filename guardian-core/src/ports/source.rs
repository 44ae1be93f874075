// guardian-core/src/ports/source.rs
//
// What the pipeline needs from a metric provider, without knowing how
// the metrics are obtained (analytics platform, file on disk, fixture).

use crate::domain::metrics::DashboardInput;
use crate::error::GuardianError;
use async_trait::async_trait;

#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Returns one input per dashboard, in the order they should be
    /// evaluated and reported.
    async fn fetch_dashboards(&self) -> Result<Vec<DashboardInput>, GuardianError>;
}
