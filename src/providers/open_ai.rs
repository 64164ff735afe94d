use crate::config::SuggestConfig;
use crate::providers::LlmProvider;
use crate::SuggestError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(config: &SuggestConfig) -> Result<Self, SuggestError> {
        let api_key = config.api_key.clone().ok_or(SuggestError::MissingApiKey)?;

        Ok(OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        let defaults = SuggestConfig::default();
        OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, SuggestError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": system},
                    {"role": "user", "content": user}
                ],
                "max_tokens": self.max_tokens,
                "temperature": self.temperature
            }))
            .send()
            .await?
            .error_for_status()?;

        let response_body: Value = response.json().await?;
        debug!("OpenAI response: {:?}", response_body);

        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(SuggestError::MissingContent)?
            .trim()
            .to_string();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn provider(url: String) -> OpenAIProvider {
        OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            url,
            "gpt-3.5-turbo".to_string(),
        )
    }

    #[tokio::test]
    async fn test_complete() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer fake_api_key")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 300,
                "temperature": 0.7,
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "usr"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "choices": [{
                        "message": {
                            "content": "\n1. Tomato Basil Pasta\n  "
                        }
                    }]
                }"#,
            )
            .create();

        let result = provider(server.url()).complete("sys", "usr").await.unwrap();
        assert_eq!(result, "1. Tomato Basil Pasta");
        mock.assert();
    }

    #[tokio::test]
    async fn test_temperature_is_sent_exactly() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::Regex(r#""temperature":0\.7[,}]"#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": [{"message": {"content": "1. Omelette"}}]}"#)
            .create();

        let result = provider(server.url()).complete("sys", "usr").await.unwrap();
        assert_eq!(result, "1. Omelette");
        mock.assert();
    }

    #[tokio::test]
    async fn test_complete_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Invalid request"}"#)
            .create();

        let result = provider(server.url()).complete("sys", "usr").await;
        assert!(matches!(result, Err(SuggestError::RequestError(_))));
        mock.assert();
    }

    #[tokio::test]
    async fn test_complete_missing_content() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create();

        let result = provider(server.url()).complete("sys", "usr").await;
        assert!(matches!(result, Err(SuggestError::MissingContent)));
        mock.assert();
    }

    #[tokio::test]
    async fn test_complete_malformed_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body("not json")
            .create();

        let result = provider(server.url()).complete("sys", "usr").await;
        assert!(matches!(result, Err(SuggestError::RequestError(_))));
        mock.assert();
    }

    #[test]
    fn test_new_requires_api_key() {
        let config = SuggestConfig::default();
        assert!(matches!(
            OpenAIProvider::new(&config),
            Err(SuggestError::MissingApiKey)
        ));
    }

    #[test]
    fn test_provider_name() {
        let config = SuggestConfig {
            api_key: Some("fake_api_key".to_string()),
            ..Default::default()
        };
        let provider = OpenAIProvider::new(&config).unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }
}
