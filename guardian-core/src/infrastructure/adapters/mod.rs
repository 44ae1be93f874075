pub mod file_source;
pub mod jira;
pub mod openai;
pub mod slack;

pub use file_source::{FileSource, StaticSource, sample_dashboards};
pub use jira::JiraTracker;
pub use openai::OpenAiAnnotator;
pub use slack::SlackNotifier;
