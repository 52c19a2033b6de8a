//! Core types and structures for fs-forge

use crate::error::{FsForgeError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// LLM provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[serde(rename = "openai")]
    OpenAi,
    Anthropic,
    #[serde(rename = "deepseek")]
    DeepSeek,
}

impl Provider {
    /// All supported providers, in display order
    pub const ALL: [Provider; 3] = [Provider::OpenAi, Provider::Anthropic, Provider::DeepSeek];

    /// Wire name used in requests and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::DeepSeek => "deepseek",
        }
    }

    /// Model used when the caller does not pick one
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-4o",
            Provider::Anthropic => "claude-sonnet-4-20250514",
            Provider::DeepSeek => "deepseek-chat",
        }
    }

    /// Models this provider accepts
    pub fn allowed_models(&self) -> &'static [&'static str] {
        match self {
            Provider::OpenAi => &["gpt-4o", "gpt-4o-mini", "gpt-4-turbo"],
            Provider::Anthropic => &["claude-sonnet-4-20250514", "claude-haiku-4-20250514"],
            Provider::DeepSeek => &["deepseek-chat"],
        }
    }

    pub fn supports_model(&self, model: &str) -> bool {
        self.allowed_models().contains(&model)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::OpenAi => write!(f, "OpenAI"),
            Provider::Anthropic => write!(f, "Anthropic"),
            Provider::DeepSeek => write!(f, "DeepSeek"),
        }
    }
}

impl FromStr for Provider {
    type Err = FsForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            "deepseek" => Ok(Provider::DeepSeek),
            other => Err(FsForgeError::unsupported_provider(other)),
        }
    }
}

/// Per-request provider configuration.
///
/// Built from user input and dropped when the request completes.
#[derive(Clone, Default)]
pub struct ProviderConfig {
    pub provider: String,
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Options for a single generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub max_tokens: u32,
    pub temperature: f32,
    pub system_prompt: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_tokens: 4000,
            temperature: 0.7,
            system_prompt: None,
        }
    }
}

impl GenerateOptions {
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Reject values the vendor APIs would refuse anyway
    pub fn validate(&self) -> Result<()> {
        if self.max_tokens == 0 {
            return Err(FsForgeError::validation("max_tokens must be positive"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(FsForgeError::validation(format!(
                "temperature must be within [0, 2], got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}
