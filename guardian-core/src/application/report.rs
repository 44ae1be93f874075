// guardian-core/src/application/report.rs
//
// Turns raw reports into the human-readable text block used by logs
// and chat sinks.

use chrono::Local;

use crate::domain::issue::DashboardReport;

pub struct ReportBuilder;

impl ReportBuilder {
    pub fn build(reports: &[DashboardReport]) -> String {
        if reports.iter().all(|r| r.issues.is_empty()) {
            return "✅ All dashboards are healthy. No data quality issues detected.".to_string();
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M");
        let mut lines = vec![format!("🚨 *Data Quality Report — {}*", timestamp), String::new()];

        for report in reports {
            let marker = if report.issues.is_empty() { "🟢" } else { "🔴" };
            lines.push(format!(
                "{} *{}* (score: {}/100)",
                marker, report.dashboard, report.score
            ));

            for issue in &report.issues {
                lines.push(format!(
                    "   • [{}] *{}* — {}",
                    issue.metric,
                    issue.kind.label(),
                    issue.details
                ));
            }

            lines.push(String::new()); // blank line between dashboards
        }

        lines.join("\n")
    }
}
