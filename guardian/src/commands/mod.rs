// guardian/src/commands/mod.rs

pub mod check;
pub mod gen_tests;
pub mod run;

use anyhow::{Context, bail};
use std::path::PathBuf;

use guardian_core::infrastructure::GuardianConfig;
use guardian_core::infrastructure::adapters::{FileSource, StaticSource, sample_dashboards};
use guardian_core::ports::source::MetricSource;

/// Picks the metric source: `--sample` wins, then `--input`, then the
/// config's `input_path`.
pub fn resolve_source(
    input: Option<PathBuf>,
    sample: bool,
    config: &GuardianConfig,
) -> anyhow::Result<Box<dyn MetricSource>> {
    if sample {
        return Ok(Box::new(StaticSource::new(sample_dashboards())));
    }
    if let Some(path) = input {
        return Ok(Box::new(FileSource::new(path)));
    }
    if let Some(path) = &config.input_path {
        return Ok(Box::new(FileSource::new(path)));
    }
    bail!("No dashboard input: pass --input <FILE>, --sample, or set input_path in guardian.yaml")
}

pub fn load_config(project_dir: &std::path::Path) -> anyhow::Result<GuardianConfig> {
    guardian_core::infrastructure::load_guardian_config(project_dir)
        .with_context(|| format!("Failed to load configuration from {:?}", project_dir))
}
