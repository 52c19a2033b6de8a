//! LLM (Large Language Model) integration module
//!
//! One trait, one implementation per vendor, and a factory that picks the
//! implementation from a [`ProviderConfig`].

pub mod generator;
pub mod providers;

// Re-export main functionality
pub use generator::{FsGenerator, FsRequest};

use crate::error::{FsForgeError, Result};
use crate::types::{GenerateOptions, Provider, ProviderConfig};
use async_trait::async_trait;

/// Core trait for all LLM clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one prompt and return the model's text.
    ///
    /// Performs exactly one outbound request; no retries.
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String>;

    /// Get provider being used
    fn provider(&self) -> Provider;

    /// Get model name being used
    fn model(&self) -> &str;
}

/// Get available LLM providers
pub fn available_providers() -> Vec<&'static str> {
    Provider::ALL.iter().map(|p| p.as_str()).collect()
}

/// Create an LLM client from configuration
pub fn create_client(config: &ProviderConfig) -> Result<Box<dyn LlmClient>> {
    let provider: Provider = config.provider.parse()?;
    let client: Box<dyn LlmClient> = match provider {
        Provider::OpenAi => Box::new(providers::OpenAiClient::new(config)?),
        Provider::Anthropic => Box::new(providers::AnthropicClient::new(config)?),
        Provider::DeepSeek => Box::new(providers::DeepSeekClient::new(config)?),
    };
    Ok(client)
}

/// Check a configuration before building a client.
///
/// Checks run in order and the first failure is returned: API key, provider,
/// model, then model membership in the provider's allowed set.
pub fn validate_config(config: &ProviderConfig) -> Result<()> {
    if config.api_key.trim().is_empty() {
        return Err(FsForgeError::config("API Key 不能为空"));
    }

    if config.provider.trim().is_empty() {
        return Err(FsForgeError::config("请选择 AI 提供商"));
    }

    if config.model.trim().is_empty() {
        return Err(FsForgeError::config("请选择模型"));
    }

    let provider: Provider = config.provider.parse()?;
    if !provider.supports_model(&config.model) {
        return Err(crate::validation_error!(
            "模型 {} 不属于 {}，可选: {}",
            config.model,
            provider,
            provider.allowed_models().join(", ")
        ));
    }

    Ok(())
}
