// guardian-core/src/domain/issue.rs
//
// Closed issue taxonomy. The check engines emit variants directly, so
// scoring and test compilation switch exhaustively instead of matching
// substrings of display labels.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// Last value above 3x the series mean (Anomaly Engine).
    Spike,
    /// Last value below 30% of the series mean (Anomaly Engine).
    Drop,
    /// Last value more than 2 standard deviations from the mean.
    Outlier,
    /// Raw series contains a null marker or a numeric zero.
    NullOrZero,
    /// Raw series contains a negative number.
    Negative,
    /// Constant numeric series (at least 2 values, all equal).
    NoVariation,
    /// Max of the numeric subset above 5x its mean (Rule Engine).
    ExtremeSpike,
    /// A raw value that is neither a number nor the null marker misuse.
    NonNumeric,
    /// A value outside the configured inclusive expected range.
    OutOfRange,
    /// Raw series shorter than the minimum sample size.
    InsufficientData,
    /// Unclassified issue, kept visible for human triage.
    Generic,
}

impl IssueKind {
    /// Human-readable taxonomy label used in reports and alerts.
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Spike => "Sudden spike detected",
            IssueKind::Drop => "Sudden drop detected",
            IssueKind::Outlier => "Outlier detected",
            IssueKind::NullOrZero => "Null / Zero values",
            IssueKind::Negative => "Negative values",
            IssueKind::NoVariation => "No variation",
            IssueKind::ExtremeSpike => "Extremely large value detected",
            IssueKind::NonNumeric => "Non-numeric value",
            IssueKind::OutOfRange => "Out-of-range values",
            IssueKind::InsufficientData => "Insufficient data points",
            IssueKind::Generic => "Data quality issue",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// Reports serialize the taxonomy as its label, keeping the output shape
// `{metric, issue, details, ai_insight?}` consumed by the sinks.
impl Serialize for IssueKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One detected quality problem on one metric.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub metric: String,
    #[serde(rename = "issue")]
    pub kind: IssueKind,
    pub details: String,
    /// Filled in place by the annotator after aggregation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
}

impl Issue {
    pub fn new(metric: impl Into<String>, kind: IssueKind, details: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            kind,
            details: details.into(),
            ai_insight: None,
        }
    }
}

/// Final product of one dashboard evaluation. Immutable after scoring.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub dashboard: String,
    pub issues: Vec<Issue>,
    /// Health score, always within [0, 100].
    pub score: u8,
}

/// One generated regression assertion, derived from exactly one issue.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedTest {
    pub dashboard: String,
    pub metric: String,
    #[serde(rename = "issue_kind")]
    pub kind: IssueKind,
    pub code: String,
}
