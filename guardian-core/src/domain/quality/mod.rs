// guardian-core/src/domain/quality/mod.rs

pub mod anomaly;
pub mod rules;
pub mod score;
pub mod stats;
pub mod validators;

// Re-exports
pub use anomaly::AnomalyEngine;
pub use rules::RuleEngine;
pub use score::ScoreCalculator;
pub use validators::RangeValidator;

use crate::domain::issue::Issue;
use crate::domain::metrics::DashboardInput;

/// Runs the three check engines against one dashboard and concatenates
/// their findings: rule issues, then anomaly issues, then range issues,
/// each in metric insertion order. No deduplication, no filtering.
pub fn collect_issues(input: &DashboardInput) -> Vec<Issue> {
    let mut issues = RuleEngine::check(&input.metrics);
    issues.extend(AnomalyEngine::detect(&input.metrics));
    issues.extend(RangeValidator::validate(
        &input.metrics,
        &input.expected_ranges,
    ));
    issues
}
