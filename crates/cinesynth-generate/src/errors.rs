use thiserror::Error;

use crate::model::OutputFailure;

/// Errors emitted while generating or writing records.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid rule: {0}")]
    InvalidRule(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {}", describe_failures(.0))]
    Output(Vec<OutputFailure>),
}

fn describe_failures(failures: &[OutputFailure]) -> String {
    failures
        .iter()
        .map(|failure| format!("{} ({})", failure.path.display(), failure.message))
        .collect::<Vec<_>>()
        .join("; ")
}
