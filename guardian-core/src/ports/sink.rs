// guardian-core/src/ports/sink.rs

use crate::domain::issue::{DashboardReport, Issue};
use crate::error::GuardianError;
use async_trait::async_trait;

/// Delivers finished reports to humans (chat, mail...). Implementations
/// own their formatting; the pipeline hands over value-level reports.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn send(&self, reports: &[DashboardReport]) -> Result<(), GuardianError>;
}

/// Files follow-up tickets for dashboards with findings.
#[async_trait]
pub trait TicketTracker: Send + Sync {
    /// Returns the browse URL of the created ticket, or `None` when
    /// nothing was filed (e.g. empty issue list).
    async fn create_ticket(
        &self,
        dashboard: &str,
        issues: &[Issue],
    ) -> Result<Option<String>, GuardianError>;
}
