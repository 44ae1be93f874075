// End-to-end pipeline runs against the built-in sample dashboards,
// with filesystem artifacts checked through a temp directory.

use anyhow::Result;
use tempfile::tempdir;

use guardian_core::application::{evaluate_all, run_pipeline};
use guardian_core::domain::insight::RuleBasedAnnotator;
use guardian_core::domain::issue::IssueKind;
use guardian_core::infrastructure::GuardianConfig;
use guardian_core::infrastructure::adapters::{StaticSource, sample_dashboards};

#[tokio::test]
async fn test_sample_scores_are_stable() {
    let reports = evaluate_all(&sample_dashboards(), &RuleBasedAnnotator).await;

    // Sales Overview: NullOrZero (-15) + NoVariation (-5), range
    // findings are free.
    assert_eq!(reports[0].dashboard, "Sales Overview");
    assert_eq!(reports[0].score, 80);
    assert_eq!(reports[0].issues.len(), 5);

    // Marketing Performance: NullOrZero + Negative (-15 each) + Drop
    // (-25) + three out-of-range findings.
    assert_eq!(reports[1].dashboard, "Marketing Performance");
    assert_eq!(reports[1].score, 45);
    assert_eq!(reports[1].issues.len(), 6);
}

#[tokio::test]
async fn test_sales_overview_issue_breakdown() {
    let reports = evaluate_all(&sample_dashboards(), &RuleBasedAnnotator).await;
    let kinds: Vec<(String, IssueKind)> = reports[0]
        .issues
        .iter()
        .map(|i| (i.metric.clone(), i.kind))
        .collect();

    assert_eq!(
        kinds,
        vec![
            ("Orders".to_string(), IssueKind::NullOrZero),
            ("Margin".to_string(), IssueKind::NoVariation),
            ("Revenue".to_string(), IssueKind::OutOfRange),
            ("Orders".to_string(), IssueKind::NonNumeric),
            ("Orders".to_string(), IssueKind::OutOfRange),
        ]
    );
}

#[tokio::test]
async fn test_run_pipeline_writes_artifacts_and_generated_tests() -> Result<()> {
    let dir = tempdir()?;
    let config = GuardianConfig {
        output_dir: dir.path().join("out").display().to_string(),
        tests_dir: dir.path().join("generated").display().to_string(),
        ..GuardianConfig::default()
    };

    let source = StaticSource::new(sample_dashboards());
    let result = run_pipeline(&source, &RuleBasedAnnotator, None, None, &config).await?;

    assert!(result.success);
    assert_eq!(result.dashboards_processed, 2);
    assert_eq!(result.issues_found, 11);

    assert!(dir.path().join("out/reports.json").exists());
    assert!(dir.path().join("out/run_results.json").exists());

    let marketing =
        std::fs::read_to_string(dir.path().join("generated/marketing_performance_tests.rs"))?;
    assert!(marketing.starts_with("// Auto-generated test suite\n"));
    assert!(marketing.contains("fn marketing_performance_sitevisits_no_nulls()"));
    assert!(marketing.contains("fn marketing_performance_conversions_no_negative_values()"));
    assert!(marketing.contains("fn marketing_performance_sitevisits_no_drop()"));
    // The three out-of-range findings compile to failing sentinels.
    assert_eq!(marketing.matches("generic_quality_check").count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_reports_json_uses_the_sink_shape() -> Result<()> {
    let dir = tempdir()?;
    let config = GuardianConfig {
        output_dir: dir.path().join("out").display().to_string(),
        tests_dir: dir.path().join("generated").display().to_string(),
        ..GuardianConfig::default()
    };

    let source = StaticSource::new(sample_dashboards());
    run_pipeline(&source, &RuleBasedAnnotator, None, None, &config).await?;

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("out/reports.json"))?)?;
    assert_eq!(json[0]["dashboard"], "Sales Overview");
    assert_eq!(json[0]["score"], 80);
    assert_eq!(json[0]["issues"][0]["issue"], "Null / Zero values");
    assert!(json[0]["issues"][0]["ai_insight"].is_string());
    Ok(())
}
