// guardian-core/src/infrastructure/adapters/slack.rs
//
// Slack incoming-webhook sink. The Block Kit payload carries the same
// information as the text report: per-dashboard score plus one section
// per issue, AI insight included when present.

use async_trait::async_trait;
use chrono::Local;
use serde_json::{Value, json};
use tracing::info;

use crate::domain::issue::DashboardReport;
use crate::error::GuardianError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::sink::AlertSink;

pub struct SlackNotifier {
    webhook_url: String,
    client: reqwest::Client,
}

impl SlackNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Block Kit rendering of a full run.
    pub fn build_blocks(reports: &[DashboardReport]) -> Vec<Value> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M").to_string();

        if reports.iter().all(|r| r.issues.is_empty()) {
            return vec![json!({
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": format!(
                        "✔️ *All dashboards are healthy*\n_No issues detected as of {}_",
                        timestamp
                    )
                }
            })];
        }

        let mut blocks = vec![
            json!({
                "type": "header",
                "text": { "type": "plain_text", "text": "🚨 Data Quality Alert" }
            }),
            json!({
                "type": "context",
                "elements": [
                    { "type": "mrkdwn", "text": format!("*Generated:* {}", timestamp) }
                ]
            }),
            json!({ "type": "divider" }),
        ];

        for report in reports {
            blocks.push(json!({
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": format!(
                        "*🔴 Dashboard:* `{}`\n*Score:* {}/100",
                        report.dashboard, report.score
                    )
                }
            }));

            for issue in &report.issues {
                let mut text = format!(
                    "*• Metric:* `{}`\n  *Issue:* {}\n  *Details:* {}",
                    issue.metric,
                    issue.kind.label(),
                    issue.details
                );
                if let Some(insight) = &issue.ai_insight {
                    text.push_str(&format!("\n  *AI Insight:* _{}_", insight));
                }
                blocks.push(json!({
                    "type": "section",
                    "text": { "type": "mrkdwn", "text": text }
                }));
            }

            blocks.push(json!({ "type": "divider" }));
        }

        blocks
    }

    /// Plain-text message, used for secondary notifications (e.g.
    /// "ticket created" follow-ups).
    pub async fn send_text(&self, text: &str) -> Result<(), GuardianError> {
        self.post(&json!({ "text": text })).await
    }

    async fn post(&self, payload: &Value) -> Result<(), GuardianError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(InfrastructureError::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::RemoteStatus {
                service: "slack".to_string(),
                status,
                body,
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl AlertSink for SlackNotifier {
    async fn send(&self, reports: &[DashboardReport]) -> Result<(), GuardianError> {
        let blocks = Self::build_blocks(reports);
        self.post(&json!({ "blocks": blocks })).await?;
        info!(dashboards = reports.len(), "Slack report dispatched");
        Ok(())
    }
}
