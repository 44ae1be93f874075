// guardian-core/src/domain/quality/score.rs

use crate::domain::issue::{Issue, IssueKind};

/// Health score deductions, applied per issue:
/// - statistical anomalies (spike / drop / outlier): -25
/// - major value problems (null-zero / negative): -15
/// - minor structural problems (no variation): -5
/// - informational findings: 0
///
/// The score starts at 100 and saturates at 0. It is a pure function
/// of the issue kinds: metric names and details never influence it.
pub struct ScoreCalculator;

impl ScoreCalculator {
    pub fn calculate_score(issues: &[Issue]) -> u8 {
        let mut score: i32 = 100;

        for issue in issues {
            score -= Self::deduction(issue.kind);
        }

        score.max(0) as u8
    }

    fn deduction(kind: IssueKind) -> i32 {
        match kind {
            // Critical anomalies
            IssueKind::Spike | IssueKind::Drop | IssueKind::Outlier => 25,
            // Major quality issues
            IssueKind::NullOrZero | IssueKind::Negative => 15,
            // Minor structural issues
            IssueKind::NoVariation => 5,
            // Informational findings. ExtremeSpike stays free: the
            // anomaly engine already prices severe spikes (DESIGN.md).
            IssueKind::ExtremeSpike
            | IssueKind::NonNumeric
            | IssueKind::OutOfRange
            | IssueKind::InsufficientData
            | IssueKind::Generic => 0,
        }
    }
}
