// guardian/src/commands/run.rs

use anyhow::Result;
use std::path::PathBuf;

use guardian_core::application::run_pipeline;
use guardian_core::domain::insight::{Annotator, RuleBasedAnnotator};
use guardian_core::infrastructure::adapters::{JiraTracker, OpenAiAnnotator, SlackNotifier};
use guardian_core::ports::sink::{AlertSink, TicketTracker};

use super::{load_config, resolve_source};

pub async fn execute(project_dir: PathBuf, input: Option<PathBuf>, sample: bool) -> Result<bool> {
    // A. Load the config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_config(&project_dir)?;
    println!("   Project: {}", config.name);

    // B. Wire the collaborators (dependency injection happens here)
    let source = resolve_source(input, sample, &config)?;

    let annotator: Box<dyn Annotator> = match &config.openai_api_key {
        Some(key) => {
            println!("   🤖 AI annotator enabled");
            Box::new(OpenAiAnnotator::new(key))
        }
        None => {
            println!("   ℹ️  AI annotator in fallback mode (no API key)");
            Box::new(RuleBasedAnnotator)
        }
    };

    let alert_sink: Option<Box<dyn AlertSink>> = config
        .slack
        .webhook_url
        .as_ref()
        .map(|url| Box::new(SlackNotifier::new(url)) as Box<dyn AlertSink>);
    if alert_sink.is_none() {
        println!("   ⚠️  Slack webhook not configured, skipping chat alerts");
    }

    let tracker: Option<Box<dyn TicketTracker>> = JiraTracker::from_config(&config.jira)
        .map(|t| Box::new(t) as Box<dyn TicketTracker>);

    // C. Run the pipeline (Application layer)
    let result = run_pipeline(
        source.as_ref(),
        annotator.as_ref(),
        alert_sink.as_deref(),
        tracker.as_deref(),
        &config,
    )
    .await?;

    if !result.success {
        eprintln!("❌ Run finished with {} errors.", result.errors.len());
    }
    Ok(result.success)
}
