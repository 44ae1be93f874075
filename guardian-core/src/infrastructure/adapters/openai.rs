// guardian-core/src/infrastructure/adapters/openai.rs

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::domain::error::DomainError;
use crate::domain::insight::Annotator;
use crate::domain::issue::Issue;
use crate::error::GuardianError;
use crate::infrastructure::error::InfrastructureError;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// LLM-backed annotator. Any failure surfaces as an error so the
/// pipeline can degrade to the rule-based fallback text.
pub struct OpenAiAnnotator {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiAnnotator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gpt-4o-mini".to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn prompt(issue: &Issue) -> String {
        format!(
            "You are a data quality expert. Explain the possible cause for the following data issue:\n\
             Metric: {}\nIssue: {}\nDetails: {}\n\
             Provide 1-2 clear, actionable sentences.",
            issue.metric,
            issue.kind.label(),
            issue.details
        )
    }
}

#[async_trait]
impl Annotator for OpenAiAnnotator {
    async fn annotate(&self, issue: &Issue) -> Result<String, GuardianError> {
        let payload = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": Self::prompt(issue) }],
            "max_tokens": 80,
            "temperature": 0.4
        });

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(InfrastructureError::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::RemoteStatus {
                service: "openai".to_string(),
                status,
                body,
            }
            .into());
        }

        let parsed: ChatResponse = response.json().await.map_err(InfrastructureError::Http)?;
        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(DomainError::AnnotationFailed {
                metric: issue.metric.clone(),
                reason: "empty completion".to_string(),
            }
            .into());
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::issue::IssueKind;

    #[test]
    fn test_prompt_carries_metric_issue_and_details() {
        let issue = Issue::new(
            "Revenue",
            IssueKind::Spike,
            "Value 5200 is > 3x above mean (1817.5)",
        );
        let prompt = OpenAiAnnotator::prompt(&issue);
        assert!(prompt.contains("Metric: Revenue"));
        assert!(prompt.contains("Issue: Sudden spike detected"));
        assert!(prompt.contains("Details: Value 5200 is > 3x above mean (1817.5)"));
    }
}
