// guardian/src/commands/gen_tests.rs
//
// Compiles regression tests straight from the aggregated issue lists;
// annotation plays no part in what gets generated.

use anyhow::Result;
use std::path::PathBuf;

use guardian_core::application::evaluate_all;
use guardian_core::domain::insight::RuleBasedAnnotator;
use guardian_core::domain::testgen::TestCompiler;
use guardian_core::infrastructure::TestFileExporter;

use super::{load_config, resolve_source};

pub async fn execute(
    project_dir: PathBuf,
    input: Option<PathBuf>,
    sample: bool,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(&project_dir)?;
    let output_dir = output_dir.unwrap_or_else(|| PathBuf::from(&config.tests_dir));

    let source = resolve_source(input, sample, &config)?;
    let dashboards = source.fetch_dashboards().await?;
    let reports = evaluate_all(&dashboards, &RuleBasedAnnotator).await;

    let generated = TestCompiler::build_tests(&reports);
    let exporter = TestFileExporter::new(&output_dir);
    let written = exporter.export_tests(&generated)?;

    for path in &written {
        println!("📝 {}", path.display());
    }
    println!(
        "✨ {} generated test files in {}",
        written.len(),
        output_dir.display()
    );
    Ok(())
}
