// guardian/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "guardian")]
#[command(about = "Data-quality guardian for dashboard KPIs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Full monitoring run (checks -> alerts -> tickets -> generated tests)
    Run {
        /// Project directory (where guardian.yaml lives)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Dashboard input file (JSON or YAML), overrides the config
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Use the built-in sample dashboards instead of an input file
        #[arg(long, default_value = "false")]
        sample: bool,
    },

    /// ✅ Evaluates dashboards and fails when a score drops below the threshold (CI mode)
    Check {
        /// Project directory (where guardian.yaml lives)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Dashboard input file (JSON or YAML), overrides the config
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Use the built-in sample dashboards instead of an input file
        #[arg(long, default_value = "false")]
        sample: bool,

        /// Minimum acceptable health score, overrides the config
        #[arg(long, short)]
        threshold: Option<u8>,
    },

    /// 📝 Compiles and exports generated regression tests only
    GenTests {
        /// Project directory (where guardian.yaml lives)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Dashboard input file (JSON or YAML), overrides the config
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Use the built-in sample dashboards instead of an input file
        #[arg(long, default_value = "false")]
        sample: bool,

        /// Output directory for the generated test files
        #[arg(long, short)]
        output_dir: Option<PathBuf>,
    },
}
