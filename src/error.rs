use thiserror::Error;

/// Errors that can occur while producing recipe suggestions
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Filter configuration failed validation
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// Completion request failed at the transport level
    #[error("completion request failed: {0}")]
    CompletionError(#[from] reqwest::Error),

    /// Completion response did not contain a recipe list
    #[error("malformed completion response: {0}")]
    MalformedCompletion(String),

    /// No API key available in config or environment
    #[error("no API key found in config or environment")]
    MissingCredential,

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
