//! Error handling for the career guidance engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerGuideError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A track name that is not part of the knowledge base.
    #[error("Unknown career track '{name}'{}", suggestion_hint(.suggestion))]
    UnknownTrack {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{}'?)", name),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CareerGuideError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CareerGuideError {
    fn from(err: anyhow::Error) -> Self {
        CareerGuideError::Processing(err.to_string())
    }
}
