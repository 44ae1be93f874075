// guardian-core/src/infrastructure/config.rs
//
// Project configuration: YAML file first, then environment overrides
// for everything secret or deployment-specific (layering pattern).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::infrastructure::error::InfrastructureError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardianConfig {
    pub name: String,
    /// Dashboard input file (JSON or YAML). Optional: the CLI can run
    /// on the built-in sample set instead.
    pub input_path: Option<String>,
    /// Where run artifacts (reports.json, run_results.json) land.
    pub output_dir: String,
    /// Where generated regression tests land.
    pub tests_dir: String,
    /// `check` exits non-zero when any dashboard scores below this.
    pub score_threshold: u8,
    pub slack: SlackConfig,
    pub jira: JiraConfig,
    pub openai_api_key: Option<String>,
}

impl Default for GuardianConfig {
    fn default() -> Self {
        Self {
            name: "guardian".to_string(),
            input_path: None,
            output_dir: "target/guardian".to_string(),
            tests_dir: "generated_tests".to_string(),
            score_threshold: 70,
            slack: SlackConfig::default(),
            jira: JiraConfig::default(),
            openai_api_key: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraConfig {
    pub url: Option<String>,
    pub email: Option<String>,
    pub api_token: Option<String>,
    pub project_key: Option<String>,
}

impl JiraConfig {
    /// Ticket filing needs the full credential set; anything partial
    /// means the tracker stays disabled.
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
            && self.email.is_some()
            && self.api_token.is_some()
            && self.project_key.is_some()
    }
}

/// Loads `guardian.yaml` from the project directory, falling back to
/// defaults when no file exists, then layers environment overrides on
/// top. Secrets are expected to come from the environment.
pub fn load_guardian_config(project_dir: &Path) -> Result<GuardianConfig, InfrastructureError> {
    let candidates = ["guardian.yaml", "guardian_conf.yaml"];

    let mut config = match candidates.iter().map(|f| project_dir.join(f)).find(|p| p.exists()) {
        Some(path) => {
            info!(path = ?path, "Loading guardian configuration");
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        }
        None => {
            info!("No configuration file found, using defaults");
            GuardianConfig::default()
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

fn apply_env_overrides(config: &mut GuardianConfig) {
    if let Ok(val) = std::env::var("GUARDIAN_OUTPUT_DIR") {
        info!(old = ?config.output_dir, new = ?val, "Overriding output dir via ENV");
        config.output_dir = val;
    }
    if let Ok(val) = std::env::var("SLACK_WEBHOOK_URL") {
        config.slack.webhook_url = Some(val);
    }
    if let Ok(val) = std::env::var("JIRA_URL") {
        config.jira.url = Some(val);
    }
    if let Ok(val) = std::env::var("JIRA_EMAIL") {
        config.jira.email = Some(val);
    }
    if let Ok(val) = std::env::var("JIRA_API_TOKEN") {
        config.jira.api_token = Some(val);
    }
    if let Ok(val) = std::env::var("JIRA_PROJECT_KEY") {
        config.jira.project_key = Some(val);
    }
    if let Ok(val) = std::env::var("OPENAI_API_KEY") {
        config.openai_api_key = Some(val);
    }
}
