//! Anthropic provider implementation
//!
//! Supports Anthropic's Claude messages API

use crate::error::Result;
use crate::llm::LlmClient;
use crate::types::{GenerateOptions, Provider, ProviderConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{
    build_http_client, network_error, parse_body, require_api_key, status_error,
    text_or_fallback, versioned_url, ChatMessage,
};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const API_VERSION: &str = "2023-06-01";

/// Anthropic client implementation
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = require_api_key(config, Provider::Anthropic)?;
        let client = build_http_client(config, Provider::Anthropic)?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    /// The system prompt is not sent separately; the whole prompt goes out
    /// as a single user message.
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String> {
        options.validate()?;

        let request = AnthropicRequest {
            model: &self.model,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            messages: vec![ChatMessage::user(prompt)],
        };

        let url = versioned_url(&self.base_url, "/messages");
        tracing::debug!(provider = "anthropic", model = %self.model, url = %url, "Sending message");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| network_error(Provider::Anthropic, e))?;

        if !response.status().is_success() {
            return Err(status_error(Provider::Anthropic, response).await);
        }

        let body: AnthropicResponse = parse_body(Provider::Anthropic, response).await?;
        let text = body.content.into_iter().next().and_then(|block| block.text);

        Ok(text_or_fallback(text))
    }

    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Anthropic API structures
#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<AnthropicContent>,
}

#[derive(Deserialize)]
struct AnthropicContent {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FsForgeError;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client(base_url: String) -> AnthropicClient {
        AnthropicClient::new(&ProviderConfig {
            provider: "anthropic".to_string(),
            api_key: "test-key".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: Some(base_url),
            timeout: None,
        })
        .expect("client should build")
    }

    #[tokio::test]
    async fn test_generate_sends_single_user_message() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_header("x-api-key", "test-key")
            .match_header("anthropic-version", "2023-06-01")
            .match_header("content-type", Matcher::Regex("application/json.*".to_string()))
            .match_body(Matcher::PartialJson(json!({
                "model": "claude-sonnet-4-20250514",
                "max_tokens": 4000,
                "messages": [{"role": "user", "content": "写一份 FS"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r###"{"id":"msg_01","content":[{"type":"text","text":"# FS"}],"stop_reason":"end_turn"}"###)
            .create_async()
            .await;

        let options = GenerateOptions::default().with_system_prompt("ignored");
        let text = client(format!("{}/v1", server.url()))
            .generate("写一份 FS", &options)
            .await
            .expect("mocked response should parse");

        mock.assert_async().await;
        assert_eq!(text, "# FS");
    }

    #[tokio::test]
    async fn test_base_url_without_version_gets_v1() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .with_status(200)
            .with_body(r#"{"content":[{"type":"text","text":"ok"}]}"#)
            .create_async()
            .await;

        let text = client(server.url())
            .generate("p", &GenerateOptions::default())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn test_status_without_message_uses_generic_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"type":"api_error"}}"#)
            .create_async()
            .await;

        let err = client(format!("{}/v1", server.url()))
            .generate("p", &GenerateOptions::default())
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(
            err,
            FsForgeError::Provider { provider: Provider::Anthropic, status_code: Some(500), .. }
        ));
        assert!(err.user_message().contains("Anthropic API error: 500"));
    }

    #[tokio::test]
    async fn test_status_with_empty_body_uses_generic_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(502)
            .create_async()
            .await;

        let err = client(format!("{}/v1", server.url()))
            .generate("p", &GenerateOptions::default())
            .await
            .unwrap_err();
        assert!(err.user_message().contains("Anthropic API error: 502"));
    }

    #[tokio::test]
    async fn test_status_with_vendor_message() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(429)
            .with_body(r#"{"error":{"type":"rate_limit_error","message":"slow down"}}"#)
            .create_async()
            .await;

        let err = client(format!("{}/v1", server.url()))
            .generate("p", &GenerateOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Anthropic API call failed: slow down");
    }

    #[tokio::test]
    async fn test_missing_text_falls_back() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(200)
            .with_body(r#"{"content":[{"type":"tool_use","id":"t1"}]}"#)
            .create_async()
            .await;

        let text = client(format!("{}/v1", server.url()))
            .generate("p", &GenerateOptions::default())
            .await
            .unwrap();
        assert_eq!(text, "生成失败");
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_provider_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client(format!("{}/v1", server.url()))
            .generate("p", &GenerateOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FsForgeError::Provider { provider: Provider::Anthropic, .. }));
        assert!(err.user_message().starts_with("Anthropic API call failed: invalid response body"));
    }
}
