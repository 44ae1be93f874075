// guardian-core/src/domain/quality/anomaly.rs

use crate::domain::issue::{Issue, IssueKind};
use crate::domain::metrics::MetricSeries;
use crate::domain::quality::stats;

/// Statistical checks against the latest observation of each metric.
///
/// A metric is skipped entirely when fewer than 2 numeric values
/// remain after dropping nulls: not enough data for statistics is not
/// a quality issue at this layer.
pub struct AnomalyEngine;

impl AnomalyEngine {
    pub fn detect(metrics: &[MetricSeries]) -> Vec<Issue> {
        let mut issues = Vec::new();

        for series in metrics {
            let numeric = series.numeric_values();
            if numeric.len() < 2 {
                continue;
            }

            // numeric.len() >= 2 guarantees both statistics exist
            let Some(mean) = stats::mean(&numeric) else {
                continue;
            };
            let Some(stdev) = stats::pstdev(&numeric) else {
                continue;
            };

            // Last NUMERIC element: trailing nulls do not move the window.
            let last_value = numeric[numeric.len() - 1];

            // --- Rule 1: Sudden spike ---
            if last_value > mean * 3.0 {
                issues.push(Issue::new(
                    &series.name,
                    IssueKind::Spike,
                    format!(
                        "Value {} is > 3x above mean ({})",
                        last_value,
                        stats::round2(mean)
                    ),
                ));
            }

            // --- Rule 2: Sudden drop ---
            if last_value < mean * 0.3 {
                issues.push(Issue::new(
                    &series.name,
                    IssueKind::Drop,
                    format!(
                        "Value {} is < 30% of mean ({})",
                        last_value,
                        stats::round2(mean)
                    ),
                ));
            }

            // --- Rule 3: Outlier ---
            if stdev > 0.0 && (last_value - mean).abs() > 2.0 * stdev {
                issues.push(Issue::new(
                    &series.name,
                    IssueKind::Outlier,
                    format!(
                        "{} differs from mean ({}) by > 2 standard deviations (σ={})",
                        last_value,
                        stats::round2(mean),
                        stats::round2(stdev)
                    ),
                ));
            }
        }

        issues
    }
}
