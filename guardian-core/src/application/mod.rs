// guardian-core/src/application/mod.rs

pub mod pipeline;
pub mod report;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI import use cases without knowing the file layout:
// `use guardian_core::application::{run_pipeline, ReportBuilder};`
pub use pipeline::{RunResult, evaluate_all, evaluate_dashboard, run_pipeline};
pub use report::ReportBuilder;
