// guardian-core/src/infrastructure/exporter.rs
//
// Persists generated regression tests: one `{dashboard}_tests.rs` file
// per dashboard in the output directory.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::testgen::sanitize;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

pub struct TestFileExporter {
    output_dir: PathBuf,
}

impl TestFileExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes every dashboard's generated source. Returns the written
    /// paths in input order.
    pub fn export_tests(
        &self,
        tests_by_dashboard: &[(String, String)],
    ) -> Result<Vec<PathBuf>, InfrastructureError> {
        if !self.output_dir.exists() {
            std::fs::create_dir_all(&self.output_dir)?;
        }

        let mut written = Vec::with_capacity(tests_by_dashboard.len());
        for (dashboard, code) in tests_by_dashboard {
            let path = self.file_path(dashboard);
            atomic_write(&path, code)?;
            info!(path = ?path, "Generated test file written");
            written.push(path);
        }
        Ok(written)
    }

    fn file_path(&self, dashboard: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_tests.rs", sanitize(dashboard)))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
