// guardian-core/src/domain/quality/rules.rs

use crate::domain::issue::{Issue, IssueKind};
use crate::domain::metrics::MetricSeries;
use crate::domain::quality::stats;

/// Deterministic structural/value checks, evaluated per metric.
///
/// Every rule runs independently: one metric can produce 0 to 4 issues.
/// A metric with no numeric values simply never triggers the
/// numeric-only rules, it is not an error.
pub struct RuleEngine;

impl RuleEngine {
    pub fn check(metrics: &[MetricSeries]) -> Vec<Issue> {
        let mut issues = Vec::new();

        for series in metrics {
            let numeric = series.numeric_values();

            // --- Rule 1: Null or zero values ---
            if series
                .values
                .iter()
                .any(|v| v.is_null() || v.as_number() == Some(0.0))
            {
                issues.push(Issue::new(
                    &series.name,
                    IssueKind::NullOrZero,
                    format!(
                        "{} contains null/zero values: {}",
                        series.name,
                        series.display_values()
                    ),
                ));
            }

            // --- Rule 2: No variation ---
            if numeric.len() > 1 && numeric.iter().all(|v| *v == numeric[0]) {
                issues.push(Issue::new(
                    &series.name,
                    IssueKind::NoVariation,
                    format!(
                        "{} has constant values: {}",
                        series.name,
                        series.display_values()
                    ),
                ));
            }

            // --- Rule 3: Negative values ---
            if numeric.iter().any(|v| *v < 0.0) {
                issues.push(Issue::new(
                    &series.name,
                    IssueKind::Negative,
                    format!(
                        "{} contains negative numbers: {}",
                        series.name,
                        series.display_values()
                    ),
                ));
            }

            // --- Rule 4: Extreme spikes ---
            if let Some(avg) = stats::mean(&numeric) {
                let max = numeric.iter().cloned().fold(f64::MIN, f64::max);
                if max > avg * 5.0 {
                    issues.push(Issue::new(
                        &series.name,
                        IssueKind::ExtremeSpike,
                        format!(
                            "{} has extreme spikes: {}",
                            series.name,
                            series.display_values()
                        ),
                    ));
                }
            }
        }

        issues
    }
}
