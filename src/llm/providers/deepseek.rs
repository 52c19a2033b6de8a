//! DeepSeek provider implementation
//!
//! DeepSeek exposes an OpenAI-compatible chat completions endpoint.

use crate::error::Result;
use crate::llm::LlmClient;
use crate::prompts::DEFAULT_PERSONA;
use crate::types::{GenerateOptions, Provider, ProviderConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{
    build_http_client, network_error, parse_body, require_api_key, status_error,
    text_or_fallback, ChatMessage,
};

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// DeepSeek client implementation
pub struct DeepSeekClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl DeepSeekClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = require_api_key(config, Provider::DeepSeek)?;
        let client = build_http_client(config, Provider::DeepSeek)?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

#[async_trait]
impl LlmClient for DeepSeekClient {
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String> {
        options.validate()?;

        let system = options.system_prompt.as_deref().unwrap_or(DEFAULT_PERSONA);
        let request = DeepSeekRequest {
            model: &self.model,
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        tracing::debug!(provider = "deepseek", model = %self.model, url = %url, "Sending chat completion");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| network_error(Provider::DeepSeek, e))?;

        if !response.status().is_success() {
            return Err(status_error(Provider::DeepSeek, response).await);
        }

        let body: DeepSeekResponse = parse_body(Provider::DeepSeek, response).await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);

        Ok(text_or_fallback(content))
    }

    fn provider(&self) -> Provider {
        Provider::DeepSeek
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// DeepSeek API structures
#[derive(Serialize)]
struct DeepSeekRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct DeepSeekResponse {
    #[serde(default)]
    choices: Vec<DeepSeekChoice>,
}

#[derive(Deserialize)]
struct DeepSeekChoice {
    message: Option<DeepSeekMessage>,
}

#[derive(Deserialize)]
struct DeepSeekMessage {
    content: Option<String>,
}
