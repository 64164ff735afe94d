use thiserror::Error;

/// Errors that can occur while generating recipe suggestions
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Network failure, non-success status, or undecodable body from the completion API
    #[error("Completion request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The response decoded but carried no `choices[0].message.content` string
    #[error("Completion response did not contain any message content")]
    MissingContent,

    /// No API key in configuration or environment
    #[error("OPENAI_API_KEY not found in config or environment")]
    MissingApiKey,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
