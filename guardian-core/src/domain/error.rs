// guardian-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Annotation failed for metric '{metric}': {reason}")]
    #[diagnostic(
        code(guardian::domain::annotation),
        help("The pipeline falls back to rule-based insight text when this happens.")
    )]
    AnnotationFailed { metric: String, reason: String },

    #[error("Dashboard '{0}' produced no report")]
    #[diagnostic(code(guardian::domain::missing_report))]
    MissingReport(String),

    #[error("Evaluation Error: {0}")]
    #[diagnostic(code(guardian::domain::evaluation))]
    EvaluationError(String),
}
