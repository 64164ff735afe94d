mod open_ai;

pub use open_ai::OpenAIProvider;

use crate::SuggestError;
use async_trait::async_trait;

/// A chat-completion backend that turns a system + user message pair into text
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Send a two-message prompt and return the first completion's text
    async fn complete(&self, system: &str, user: &str) -> Result<String, SuggestError>;
}
