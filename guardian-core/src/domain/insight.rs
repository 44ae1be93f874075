// guardian-core/src/domain/insight.rs
//
// Insight annotation is a capability: the pipeline depends on the
// trait only. The default implementation is deterministic rule-based
// text; an LLM-backed adapter lives in the infrastructure layer.

use crate::domain::issue::{Issue, IssueKind};
use crate::error::GuardianError;
use async_trait::async_trait;

#[async_trait]
pub trait Annotator: Send + Sync {
    /// Returns a 1-2 sentence explanation for one issue.
    async fn annotate(&self, issue: &Issue) -> Result<String, GuardianError>;
}

/// Deterministic fallback annotator. Never fails.
pub struct RuleBasedAnnotator;

impl RuleBasedAnnotator {
    /// Rule-based explanation text, keyed on the issue kind.
    pub fn explain(issue: &Issue) -> String {
        let metric = &issue.metric;
        match issue.kind {
            IssueKind::Spike => format!(
                "{metric} shows an unexpected spike — likely caused by duplicated rows or incorrect aggregation."
            ),
            IssueKind::Drop => format!(
                "{metric} dropped sharply — may indicate missing data or broken upstream pipeline."
            ),
            IssueKind::NullOrZero => format!(
                "{metric} contains null/zero values — check ETL validity or missing joins."
            ),
            IssueKind::NoVariation => {
                format!("{metric} shows no variation — check if data refresh is working.")
            }
            IssueKind::Negative => format!(
                "{metric} contains negative values — likely a logical or transformation error."
            ),
            _ => "Potential data quality issue detected. Investigate upstream data sources."
                .to_string(),
        }
    }
}

#[async_trait]
impl Annotator for RuleBasedAnnotator {
    async fn annotate(&self, issue: &Issue) -> Result<String, GuardianError> {
        Ok(Self::explain(issue))
    }
}

/// Annotates every issue in place. Annotation failures degrade to the
/// rule-based text instead of aborting the pipeline.
pub async fn annotate_all(annotator: &dyn Annotator, issues: &mut [Issue]) {
    for issue in issues.iter_mut() {
        let insight = match annotator.annotate(issue).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) | Err(_) => RuleBasedAnnotator::explain(issue),
        };
        issue.ai_insight = Some(insight);
    }
}
