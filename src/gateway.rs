use log::{debug, info};

use crate::config::SuggestConfig;
use crate::details::parse_recipe_details;
use crate::model::RecipeDetails;
use crate::prompt::{
    build_detail_prompt, build_user_prompt, RECIPE_DETAIL_SYSTEM_PROMPT, RECIPE_SYSTEM_PROMPT,
};
use crate::providers::{LlmProvider, OpenAIProvider};
use crate::SuggestError;

/// Forwards ingredient lists to a completion provider and returns the raw text.
///
/// Holds no per-request state, so one gateway can serve concurrent requests.
pub struct RecipeGateway {
    provider: Box<dyn LlmProvider>,
}

impl RecipeGateway {
    /// Create a gateway backed by the OpenAI chat-completions API
    pub fn new(config: &SuggestConfig) -> Result<Self, SuggestError> {
        Ok(Self::with_provider(Box::new(OpenAIProvider::new(config)?)))
    }

    pub fn with_provider(provider: Box<dyn LlmProvider>) -> Self {
        RecipeGateway { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Ask the provider for 3-5 recipes using `ingredients`.
    ///
    /// Empty input is sent as-is. Any upstream failure is returned without retry.
    pub async fn generate(&self, ingredients: &str) -> Result<String, SuggestError> {
        info!("Received ingredients: {}", ingredients);

        let user_prompt = build_user_prompt(ingredients);
        let text = self
            .provider
            .complete(RECIPE_SYSTEM_PROMPT, &user_prompt)
            .await?;

        debug!("Recipes text from {}: {}", self.provider.provider_name(), text);
        Ok(text)
    }

    /// Ask the provider for the ingredients, quantities, instructions and notes of one recipe.
    pub async fn extract_details(&self, url: &str) -> Result<RecipeDetails, SuggestError> {
        info!("Extracting recipe details for {}", url);

        let text = self
            .provider
            .complete(RECIPE_DETAIL_SYSTEM_PROMPT, &build_detail_prompt(url))
            .await?;
        debug!("Recipe response: {}", text);

        let mut details = parse_recipe_details(&text);
        details.url = url.to_string();
        Ok(details)
    }
}
