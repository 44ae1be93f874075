// guardian-core/src/domain/testgen.rs
//
// Compiles detected issues into regression-test sketches: one named
// `#[test]` function per issue, grouped per dashboard. The generated
// bodies reference the series bindings (`values`, `last_value`,
// `mean`) symbolically; they are triage artifacts for a human to wire
// into a harness, exactly like the reports they derive from.

use crate::domain::issue::{DashboardReport, GeneratedTest, IssueKind};

const GENERATED_HEADER: &str = "// Auto-generated test suite\n// Do not edit manually\n\n";

pub struct TestCompiler;

impl TestCompiler {
    /// One generated assertion per issue, no merging: a metric that
    /// triggered the same kind twice yields two identical functions.
    pub fn compile(report: &DashboardReport) -> Vec<GeneratedTest> {
        report
            .issues
            .iter()
            .map(|issue| {
                let name = format!(
                    "{}_{}_{}",
                    sanitize(&report.dashboard),
                    sanitize(&issue.metric),
                    suffix(issue.kind)
                );
                GeneratedTest {
                    dashboard: report.dashboard.clone(),
                    metric: issue.metric.clone(),
                    kind: issue.kind,
                    code: render(&name, issue.kind),
                }
            })
            .collect()
    }

    /// Maps each dashboard to one generated source file: header comment
    /// plus the concatenated assertion functions, in issue order.
    pub fn build_tests(reports: &[DashboardReport]) -> Vec<(String, String)> {
        reports
            .iter()
            .map(|report| {
                let body: Vec<String> = Self::compile(report)
                    .into_iter()
                    .map(|t| t.code)
                    .collect();
                (
                    report.dashboard.clone(),
                    format!("{}{}", GENERATED_HEADER, body.join("\n")),
                )
            })
            .collect()
    }
}

/// Lower-cases and maps spaces and path separators to underscores so
/// the result is a valid function (and file) name.
pub fn sanitize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '/' { '_' } else { c })
        .collect()
}

fn suffix(kind: IssueKind) -> &'static str {
    match kind {
        IssueKind::Spike => "no_spike",
        IssueKind::Drop => "no_drop",
        IssueKind::NullOrZero => "no_nulls",
        IssueKind::Negative => "no_negative_values",
        IssueKind::NoVariation => "variation_exists",
        _ => "generic_quality_check",
    }
}

fn render(name: &str, kind: IssueKind) -> String {
    let assertion = match kind {
        IssueKind::Spike => "assert!(last_value <= mean * 3.0);",
        IssueKind::Drop => "assert!(last_value >= mean * 0.3);",
        IssueKind::NullOrZero => {
            "assert!(values.iter().all(|v| !v.is_null() && v.as_number() != Some(0.0)));"
        }
        IssueKind::Negative => "assert!(values.iter().all(|v| *v >= 0.0));",
        IssueKind::NoVariation => "assert!(distinct_count(&values) > 1);",
        // Sentinel for unhandled taxonomy entries; always fails so a
        // human has to look at it.
        _ => "panic!(\"Unexpected data quality issue detected.\");",
    };
    format!("#[test]\nfn {}() {{\n    {}\n}}\n", name, assertion)
}
