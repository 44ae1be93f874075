// guardian/src/commands/check.rs
//
// CI mode: deterministic evaluation (rule-based annotation only, no
// network), table summary, non-zero exit when a score falls below the
// threshold.

use anyhow::Result;
use comfy_table::Table;
use std::path::PathBuf;

use guardian_core::application::{ReportBuilder, evaluate_all};
use guardian_core::domain::insight::RuleBasedAnnotator;

use super::{load_config, resolve_source};

pub async fn execute(
    project_dir: PathBuf,
    input: Option<PathBuf>,
    sample: bool,
    threshold: Option<u8>,
) -> Result<bool> {
    let config = load_config(&project_dir)?;
    let threshold = threshold.unwrap_or(config.score_threshold);

    let source = resolve_source(input, sample, &config)?;
    let dashboards = source.fetch_dashboards().await?;
    let reports = evaluate_all(&dashboards, &RuleBasedAnnotator).await;

    let mut table = Table::new();
    table.set_header(vec!["Dashboard", "Score", "Issues", "Status"]);
    for report in &reports {
        let status = if report.score >= threshold { "OK" } else { "FAIL" };
        table.add_row(vec![
            report.dashboard.clone(),
            format!("{}/100", report.score),
            report.issues.len().to_string(),
            status.to_string(),
        ]);
    }
    println!("{table}");
    println!();
    println!("{}", ReportBuilder::build(&reports));

    let worst = reports.iter().map(|r| r.score).min().unwrap_or(100);
    if worst < threshold {
        eprintln!(
            "❌ Health check failed: lowest score {} is below threshold {}.",
            worst, threshold
        );
        return Ok(false);
    }
    println!("✅ All {} dashboards at or above threshold {}.", reports.len(), threshold);
    Ok(true)
}
