//! OpenAI provider implementation
//!
//! Supports OpenAI API and OpenAI-compatible APIs (OpenRouter, OneAPI, etc.)

use crate::error::Result;
use crate::llm::LlmClient;
use crate::prompts::DEFAULT_PERSONA;
use crate::types::{GenerateOptions, Provider, ProviderConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{
    build_http_client, network_error, parse_body, require_api_key, status_error,
    text_or_fallback, versioned_url, ChatMessage,
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI client implementation
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = require_api_key(config, Provider::OpenAi)?;
        let client = build_http_client(config, Provider::OpenAi)?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        versioned_url(&self.base_url, endpoint)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String> {
        options.validate()?;

        let system = options.system_prompt.as_deref().unwrap_or(DEFAULT_PERSONA);
        let request = OpenAiRequest {
            model: &self.model,
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let url = self.build_url("/chat/completions");
        tracing::debug!(provider = "openai", model = %self.model, url = %url, "Sending chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| network_error(Provider::OpenAi, e))?;

        if !response.status().is_success() {
            return Err(status_error(Provider::OpenAi, response).await);
        }

        let body: OpenAiResponse = parse_body(Provider::OpenAi, response).await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);

        Ok(text_or_fallback(content))
    }

    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// OpenAI API structures
#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: Option<OpenAiResponseMessage>,
}

#[derive(Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}
