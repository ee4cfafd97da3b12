// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL.";
pub const NETWORK_FAILURE_MESSAGE: &str = "Failed to analyze feedback. Check the URL or try again.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Please enter a valid URL.")]
    Validation,

    #[error("Service error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Service { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl AnalysisError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Validation => INVALID_URL_MESSAGE.to_string(),
            AnalysisError::Service { message: Some(message), .. } => message.clone(),
            AnalysisError::Service { message: None, .. }
            | AnalysisError::Transport(_)
            | AnalysisError::Parse(_) => NETWORK_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Parse(err.to_string())
    }
}
