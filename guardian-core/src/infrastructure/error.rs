// guardian-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(guardian::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(guardian::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Error: {0}")]
    #[diagnostic(code(guardian::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Input file not found at '{0}'")]
    #[diagnostic(code(guardian::infra::input_missing))]
    InputNotFound(String),

    // --- HTTP (Slack / Jira / OpenAI) ---
    #[error("HTTP Error: {0}")]
    #[diagnostic(
        code(guardian::infra::http),
        help("Check the endpoint URL and your network connectivity.")
    )]
    Http(#[from] reqwest::Error),

    #[error("Remote service '{service}' answered {status}: {body}")]
    #[diagnostic(code(guardian::infra::remote_status))]
    RemoteStatus {
        service: String,
        status: u16,
        body: String,
    },
}
