// guardian-core/src/infrastructure/adapters/file_source.rs
//
// Metric sources that need no network: a dashboard file on disk and
// the built-in sample set. Platform connectors (Tableau & co) would
// implement the same port.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::metrics::{DashboardInput, MetricSeries};
use crate::error::GuardianError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::source::MetricSource;

/// Reads a list of `DashboardInput` from a JSON or YAML file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(path: &Path, content: &str) -> Result<Vec<DashboardInput>, InfrastructureError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(content)?),
            // YAML is the default: it also parses JSON-ish inputs
            _ => Ok(serde_yaml::from_str(content)?),
        }
    }
}

#[async_trait]
impl MetricSource for FileSource {
    async fn fetch_dashboards(&self) -> Result<Vec<DashboardInput>, GuardianError> {
        if !self.path.exists() {
            return Err(InfrastructureError::InputNotFound(
                self.path.display().to_string(),
            )
            .into());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        let dashboards = Self::parse(&self.path, &content)?;
        info!(
            count = dashboards.len(),
            path = ?self.path,
            "Loaded dashboard inputs"
        );
        Ok(dashboards)
    }
}

/// In-memory source, used by the sample mode and by tests.
pub struct StaticSource {
    dashboards: Vec<DashboardInput>,
}

impl StaticSource {
    pub fn new(dashboards: Vec<DashboardInput>) -> Self {
        Self { dashboards }
    }
}

#[async_trait]
impl MetricSource for StaticSource {
    async fn fetch_dashboards(&self) -> Result<Vec<DashboardInput>, GuardianError> {
        Ok(self.dashboards.clone())
    }
}

/// The built-in demo data set: two dashboards covering every check
/// engine (nulls, constants, negatives, drops, out-of-range values).
pub fn sample_dashboards() -> Vec<DashboardInput> {
    vec![
        DashboardInput::new("Sales Overview")
            .with_metric(MetricSeries::from_numbers(
                "Revenue",
                &[Some(1000.0), Some(1050.0), Some(1020.0), Some(5200.0)],
            ))
            .with_metric(MetricSeries::from_numbers(
                "Orders",
                &[Some(82.0), Some(80.0), Some(81.0), None],
            ))
            .with_metric(MetricSeries::from_numbers(
                "Margin",
                &[Some(25.0), Some(25.0), Some(25.0), Some(25.0)],
            ))
            .with_range("Revenue", 900.0, 2000.0)
            .with_range("Orders", 50.0, 150.0)
            .with_range("Margin", 10.0, 50.0),
        DashboardInput::new("Marketing Performance")
            .with_metric(MetricSeries::from_numbers(
                "SiteVisits",
                &[Some(300.0), Some(310.0), Some(305.0), Some(0.0)],
            ))
            .with_metric(MetricSeries::from_numbers(
                "Conversions",
                &[Some(5.0), Some(7.0), Some(-2.0), Some(8.0)],
            ))
            .with_metric(MetricSeries::from_numbers(
                "Cost",
                &[Some(200.0), Some(180.0), Some(500.0), Some(210.0)],
            ))
            .with_range("SiteVisits", 200.0, 1000.0)
            .with_range("Conversions", 0.0, 50.0)
            .with_range("Cost", 100.0, 300.0),
    ]
}
