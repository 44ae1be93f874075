// guardian-core/src/application/pipeline.rs

use std::path::Path;

use futures::StreamExt;
use tracing::{error, info, warn};

use crate::application::report::ReportBuilder;
use crate::domain::insight::{Annotator, annotate_all};
use crate::domain::issue::DashboardReport;
use crate::domain::metrics::DashboardInput;
use crate::domain::quality::{ScoreCalculator, collect_issues};
use crate::domain::testgen::TestCompiler;
use crate::error::GuardianError;
use crate::infrastructure::TestFileExporter;
use crate::infrastructure::config::GuardianConfig;
use crate::ports::sink::{AlertSink, TicketTracker};
use crate::ports::source::MetricSource;

/// Dashboards evaluated concurrently. Evaluation is CPU-light; the
/// bound mostly limits simultaneous annotation calls.
const EVAL_CONCURRENCY: usize = 8;

#[derive(serde::Serialize, serde::Deserialize)]
pub struct RunResult {
    pub success: bool,
    pub dashboards_processed: usize,
    pub issues_found: usize,
    pub errors: Vec<String>,
}

/// Evaluates one dashboard: check engines, annotation, score.
///
/// Pure apart from the annotator call; annotation failures degrade to
/// the rule-based fallback inside `annotate_all`, so this never fails.
/// A dashboard with no metrics yields an empty issue list and a
/// perfect score: absence of data is not a quality issue at this layer.
pub async fn evaluate_dashboard(
    input: &DashboardInput,
    annotator: &dyn Annotator,
) -> DashboardReport {
    let mut issues = collect_issues(input);
    annotate_all(annotator, &mut issues).await;
    let score = ScoreCalculator::calculate_score(&issues);

    DashboardReport {
        dashboard: input.dashboard.clone(),
        issues,
        score,
    }
}

/// Evaluates every dashboard with bounded concurrency, preserving the
/// input order in the returned reports.
pub async fn evaluate_all(
    inputs: &[DashboardInput],
    annotator: &dyn Annotator,
) -> Vec<DashboardReport> {
    futures::stream::iter(inputs.iter().map(|input| evaluate_dashboard(input, annotator)))
        .buffered(EVAL_CONCURRENCY)
        .collect()
        .await
}

/// Full monitoring run: fetch, evaluate, alert, file tickets, compile
/// and export regression tests, persist run artifacts.
///
/// A failing sink or tracker is recorded and skipped; it never aborts
/// the evaluation of the remaining dashboards.
pub async fn run_pipeline(
    source: &dyn MetricSource,
    annotator: &dyn Annotator,
    alert_sink: Option<&dyn AlertSink>,
    tracker: Option<&dyn TicketTracker>,
    config: &GuardianConfig,
) -> Result<RunResult, GuardianError> {
    println!("🚀 Starting data quality run...");
    let start_time = std::time::Instant::now();
    let mut errors = Vec::new();

    // 1. FETCH (Port)
    let dashboards = source.fetch_dashboards().await?;
    println!("📦 {} dashboards fetched", dashboards.len());

    // 2. EVALUATE (Domain, parallel per dashboard)
    let reports = evaluate_all(&dashboards, annotator).await;
    let issues_found: usize = reports.iter().map(|r| r.issues.len()).sum();
    info!(
        dashboards = reports.len(),
        issues = issues_found,
        "Evaluation complete"
    );

    // 3. RENDER + PERSIST ARTIFACTS
    let output_dir = Path::new(&config.output_dir);
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)?;
    }
    save_json(&output_dir.join("reports.json"), &reports)?;

    let text_report = ReportBuilder::build(&reports);
    println!("{}", text_report);

    // 4. ALERTS
    if let Some(sink) = alert_sink {
        if let Err(e) = sink.send(&reports).await {
            warn!("Alert dispatch failed: {}", e);
            errors.push(format!("alert: {}", e));
        }
    }

    // 5. TICKETS (one per dashboard with findings)
    if let Some(tracker) = tracker {
        for report in &reports {
            match tracker.create_ticket(&report.dashboard, &report.issues).await {
                Ok(Some(url)) => println!("🐞 Ticket created for {}: {}", report.dashboard, url),
                Ok(None) => {}
                Err(e) => {
                    error!(dashboard = %report.dashboard, "Ticket filing failed: {}", e);
                    errors.push(format!("{}: {}", report.dashboard, e));
                }
            }
        }
    }

    // 6. GENERATED REGRESSION TESTS
    let generated = TestCompiler::build_tests(&reports);
    let exporter = TestFileExporter::new(&config.tests_dir);
    match exporter.export_tests(&generated) {
        Ok(written) => println!("📝 {} generated test files written", written.len()),
        Err(e) => {
            error!("Test export failed: {}", e);
            errors.push(format!("test export: {}", e));
        }
    }

    let duration = start_time.elapsed();
    println!(
        "✨ Done in {:.2}s. {} dashboards, {} issues.",
        duration.as_secs_f64(),
        reports.len(),
        issues_found
    );

    let result = RunResult {
        success: errors.is_empty(),
        dashboards_processed: reports.len(),
        issues_found,
        errors,
    };
    save_json(&output_dir.join("run_results.json"), &result)?;

    Ok(result)
}

fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), GuardianError> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| GuardianError::InternalError(format!("Serialization: {}", e)))?;
    crate::infrastructure::fs::atomic_write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::insight::RuleBasedAnnotator;
    use crate::domain::issue::IssueKind;
    use crate::domain::metrics::MetricSeries;
    use crate::infrastructure::adapters::sample_dashboards;

    #[tokio::test]
    async fn test_empty_dashboard_scores_perfect() {
        let input = DashboardInput::new("Empty");
        let report = evaluate_dashboard(&input, &RuleBasedAnnotator).await;
        assert!(report.issues.is_empty());
        assert_eq!(report.score, 100);
    }

    #[tokio::test]
    async fn test_margin_no_variation_scores_95() {
        let input = DashboardInput::new("Sales").with_metric(MetricSeries::from_numbers(
            "Margin",
            &[Some(25.0), Some(25.0), Some(25.0), Some(25.0)],
        ));
        let report = evaluate_dashboard(&input, &RuleBasedAnnotator).await;
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::NoVariation);
        assert_eq!(report.score, 95);
    }

    #[tokio::test]
    async fn test_conversions_scenario_scores_85() {
        // Negative (rules, -15) + OutOfRange (validator, 0): score 85.
        let input = DashboardInput::new("Marketing")
            .with_metric(MetricSeries::from_numbers(
                "Conversions",
                &[Some(5.0), Some(7.0), Some(-2.0), Some(8.0)],
            ))
            .with_range("Conversions", 0.0, 50.0);
        let report = evaluate_dashboard(&input, &RuleBasedAnnotator).await;
        assert_eq!(report.score, 85);
        let kinds: Vec<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![IssueKind::Negative, IssueKind::OutOfRange]);
    }

    #[tokio::test]
    async fn test_every_issue_gets_an_insight() {
        let input = sample_dashboards().remove(1);
        let report = evaluate_dashboard(&input, &RuleBasedAnnotator).await;
        assert!(!report.issues.is_empty());
        assert!(report.issues.iter().all(|i| i.ai_insight.is_some()));
    }

    #[tokio::test]
    async fn test_evaluate_all_preserves_input_order() {
        let inputs = sample_dashboards();
        let reports = evaluate_all(&inputs, &RuleBasedAnnotator).await;
        let names: Vec<&str> = reports.iter().map(|r| r.dashboard.as_str()).collect();
        assert_eq!(names, vec!["Sales Overview", "Marketing Performance"]);
    }
}
