pub mod error;
pub mod insight;
pub mod issue;
pub mod metrics;
pub mod quality;
pub mod testgen;

// Convenient re-exports to simplify imports elsewhere
pub use error::DomainError;
pub use issue::{DashboardReport, GeneratedTest, Issue, IssueKind};
pub use metrics::{DashboardInput, MetricSeries, MetricValue};
