pub mod adapters;
pub mod config;
pub mod error;
pub mod exporter;
pub mod fs;

pub use config::{GuardianConfig, load_guardian_config};
pub use error::InfrastructureError;
pub use exporter::TestFileExporter;
