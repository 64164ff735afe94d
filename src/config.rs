use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the completion API used to generate suggestions
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SuggestConfig {
    /// API key for bearer authentication (falls back to OPENAI_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the completion API, without the `/v1/...` path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

// Default value functions
fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    300
}

impl SuggestConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SUGGEST__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// When no key is configured, `OPENAI_API_KEY` is used.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPE_SUGGEST__API_KEY
            .add_source(
                Environment::with_prefix("RECIPE_SUGGEST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config = Self::from_settings(settings)?;
        if config.api_key.is_none() {
            config.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        Ok(config)
    }

    fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        settings.try_deserialize()
    }
}
