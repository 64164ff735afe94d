use crate::{config::SuggestConfig, gateway::RecipeGateway, SuggestError};

/// Builder for configuring a [`RecipeGateway`] in code
#[derive(Debug, Default)]
pub struct RecipeSuggesterBuilder {
    config: Option<SuggestConfig>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    temperature: Option<f64>,
    max_tokens: Option<u32>,
}

impl RecipeSuggesterBuilder {
    /// Start from an already loaded configuration instead of the defaults
    ///
    /// # Example
    /// ```no_run
    /// use recipe_suggest::{RecipeSuggester, SuggestConfig};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let builder = RecipeSuggester::builder().config(SuggestConfig::load()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn config(mut self, config: SuggestConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the API key sent as the bearer credential
    ///
    /// # Example
    /// ```
    /// use recipe_suggest::RecipeSuggester;
    ///
    /// let builder = RecipeSuggester::builder().api_key("your-api-key");
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the gateway at a different API host (proxies, local mocks)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Resolve the final configuration without building a gateway
    pub fn to_config(&self) -> Result<SuggestConfig, SuggestError> {
        let mut config = self.config.clone().unwrap_or_default();

        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(SuggestError::BuilderError(format!(
                    "temperature must be between 0 and 2, got {}",
                    temperature
                )));
            }
            config.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            if max_tokens == 0 {
                return Err(SuggestError::BuilderError(
                    "max_tokens must be greater than zero".to_string(),
                ));
            }
            config.max_tokens = max_tokens;
        }

        Ok(config)
    }

    /// Build the gateway
    ///
    /// # Errors
    /// Returns `SuggestError` if:
    /// - No API key was given here or in the supplied configuration
    /// - A sampling parameter is out of range
    pub fn build(self) -> Result<RecipeGateway, SuggestError> {
        RecipeGateway::new(&self.to_config()?)
    }
}

/// Main entry point for the builder API
pub struct RecipeSuggester;

impl RecipeSuggester {
    /// Creates a new builder for a recipe gateway
    ///
    /// # Example
    /// ```
    /// use recipe_suggest::RecipeSuggester;
    ///
    /// let builder = RecipeSuggester::builder();
    /// ```
    pub fn builder() -> RecipeSuggesterBuilder {
        RecipeSuggesterBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_config() {
        let base = SuggestConfig {
            api_key: Some("from-config".to_string()),
            model: "gpt-4o".to_string(),
            ..Default::default()
        };

        let config = RecipeSuggester::builder()
            .config(base)
            .api_key("from-builder")
            .max_tokens(150)
            .to_config()
            .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("from-builder"));
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.max_tokens, 150);
        assert_eq!(config.temperature, 0.7);
    }

    #[test]
    fn test_builder_rejects_bad_parameters() {
        let result = RecipeSuggester::builder().temperature(3.5).to_config();
        assert!(matches!(result, Err(SuggestError::BuilderError(_))));

        let result = RecipeSuggester::builder().max_tokens(0).to_config();
        assert!(matches!(result, Err(SuggestError::BuilderError(_))));
    }

    #[test]
    fn test_build_without_api_key() {
        let result = RecipeSuggester::builder().model("gpt-4o-mini").build();
        assert!(matches!(result, Err(SuggestError::MissingApiKey)));
    }

    #[test]
    fn test_build_with_api_key() {
        let gateway = RecipeSuggester::builder().api_key("test-key").build().unwrap();
        assert_eq!(gateway.provider_name(), "openai");
    }
}
