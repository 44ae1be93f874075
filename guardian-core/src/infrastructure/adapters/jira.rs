// guardian-core/src/infrastructure/adapters/jira.rs

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::domain::issue::Issue;
use crate::error::GuardianError;
use crate::infrastructure::config::JiraConfig;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::sink::TicketTracker;

/// Files one Jira ticket per dashboard with findings (REST API v2).
pub struct JiraTracker {
    url: String,
    email: String,
    api_token: String,
    project_key: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct CreatedIssue {
    key: String,
}

impl JiraTracker {
    /// Returns `None` when the credential set is incomplete; the
    /// pipeline then simply skips ticket filing.
    pub fn from_config(config: &JiraConfig) -> Option<Self> {
        if !config.is_configured() {
            return None;
        }
        Some(Self {
            url: config.url.clone()?,
            email: config.email.clone()?,
            api_token: config.api_token.clone()?,
            project_key: config.project_key.clone()?,
            client: reqwest::Client::new(),
        })
    }

    fn describe(issues: &[Issue]) -> String {
        issues
            .iter()
            .map(|issue| {
                format!(
                    "* [{}] {} - {}",
                    issue.metric,
                    issue.kind.label(),
                    issue.details
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl TicketTracker for JiraTracker {
    async fn create_ticket(
        &self,
        dashboard: &str,
        issues: &[Issue],
    ) -> Result<Option<String>, GuardianError> {
        if issues.is_empty() {
            return Ok(None);
        }

        let payload = json!({
            "fields": {
                "project": { "key": self.project_key },
                "summary": format!("[Data Quality] {} ({} issues)", dashboard, issues.len()),
                "description": Self::describe(issues),
                "issuetype": { "name": "Task" }
            }
        });

        let endpoint = format!("{}/rest/api/2/issue", self.url.trim_end_matches('/'));
        let response = self
            .client
            .post(&endpoint)
            .basic_auth(&self.email, Some(&self.api_token))
            .json(&payload)
            .send()
            .await
            .map_err(InfrastructureError::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::RemoteStatus {
                service: "jira".to_string(),
                status,
                body,
            }
            .into());
        }

        let created: CreatedIssue = response.json().await.map_err(InfrastructureError::Http)?;
        let browse_url = format!("{}/browse/{}", self.url.trim_end_matches('/'), created.key);
        info!(dashboard, ticket = %created.key, "Jira ticket created");
        Ok(Some(browse_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::issue::IssueKind;

    #[test]
    fn test_incomplete_config_disables_tracker() {
        let config = JiraConfig {
            url: Some("https://example.atlassian.net".to_string()),
            ..JiraConfig::default()
        };
        assert!(JiraTracker::from_config(&config).is_none());
    }

    #[test]
    fn test_description_lists_every_issue() {
        let issues = vec![
            Issue::new("Revenue", IssueKind::Spike, "Value 5200 is > 3x above mean"),
            Issue::new("Orders", IssueKind::NullOrZero, "Orders contains null/zero values"),
        ];
        let description = JiraTracker::describe(&issues);
        assert!(description.contains("* [Revenue] Sudden spike detected"));
        assert!(description.contains("* [Orders] Null / Zero values"));
        assert_eq!(description.lines().count(), 2);
    }
}
