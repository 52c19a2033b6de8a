//! FS document generator using LLM

use crate::document::{add_metadata, GeneratedDocument};
use crate::error::{FsForgeError, Result};
use crate::llm::{create_client, validate_config};
use crate::prompts::{format_prompt, get_prompt_template, PromptVariables, DEFAULT_SYSTEM_PROMPT};
use crate::types::{GenerateOptions, Provider, ProviderConfig};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Token budget for one FS document
pub const FS_MAX_TOKENS: u32 = 4000;
/// Sampling temperature for FS generation
pub const FS_TEMPERATURE: f32 = 0.7;

/// One generation request as submitted by the user
#[derive(Clone, Default)]
pub struct FsRequest {
    pub requirement: String,
    pub module_type: String,
    pub complexity: String,
    pub reference_text: Option<String>,
    pub api_key: String,
    pub provider: String,
    pub model: Option<String>,
}

impl FsRequest {
    /// Fill the module template with this request's requirement and reference
    pub fn prompt(&self) -> String {
        let reference_text = self.reference_text.as_deref().unwrap_or_default().trim();
        format_prompt(
            get_prompt_template(&self.module_type),
            &PromptVariables {
                requirement: self.requirement.trim().to_string(),
                complexity: self.complexity.clone(),
                reference_text: reference_text.to_string(),
            },
        )
    }
}

/// FS generator: validates a request, builds the prompt and runs it
/// through a freshly created provider client.
///
/// Holds only read-only settings, so one instance is shared by all requests.
#[derive(Clone, Default)]
pub struct FsGenerator {
    base_urls: Arc<HashMap<Provider, String>>,
    timeout: Option<Duration>,
}

impl FsGenerator {
    /// Create a new generator talking to the vendors' default endpoints
    pub fn new() -> Self {
        Self::default()
    }

    /// Route calls for `provider` to another endpoint
    pub fn with_base_url(mut self, provider: Provider, base_url: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.base_urls).insert(provider, base_url.into());
        self
    }

    /// Apply a deadline to every outbound call
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the request and turn it into a provider configuration.
    ///
    /// The first failing check wins; nothing touches the network here.
    pub fn prepare(&self, request: &FsRequest) -> Result<ProviderConfig> {
        if request.requirement.trim().is_empty() {
            return Err(FsForgeError::validation("请输入业务需求"));
        }

        if request.api_key.trim().is_empty() {
            return Err(FsForgeError::validation("请输入 API Key"));
        }

        if request.provider.trim().is_empty() {
            return Err(FsForgeError::validation("请选择 AI 提供商"));
        }

        let provider: Provider = request.provider.parse()?;
        let model = request
            .model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| provider.default_model())
            .to_string();

        let config = ProviderConfig {
            provider: provider.as_str().to_string(),
            api_key: request.api_key.trim().to_string(),
            model,
            base_url: self.base_urls.get(&provider).cloned(),
            timeout: self.timeout,
        };
        validate_config(&config)?;

        Ok(config)
    }

    /// Generate one FS document
    pub async fn generate(&self, request: &FsRequest) -> Result<GeneratedDocument> {
        let config = self.prepare(request)?;
        let client = create_client(&config)?;

        let prompt = request.prompt();

        let options = GenerateOptions {
            max_tokens: FS_MAX_TOKENS,
            temperature: FS_TEMPERATURE,
            system_prompt: Some(DEFAULT_SYSTEM_PROMPT.to_string()),
        };

        let start_time = Instant::now();
        let result = client.generate(&prompt, &options).await;

        match &result {
            Ok(content) => {
                tracing::info!(
                    provider = %client.provider(),
                    model = %client.model(),
                    module = %request.module_type,
                    content_chars = %content.chars().count(),
                    duration_ms = %start_time.elapsed().as_millis(),
                    "FS generation completed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    provider = %client.provider(),
                    model = %client.model(),
                    error = %e,
                    duration_ms = %start_time.elapsed().as_millis(),
                    "FS generation failed"
                );
            }
        }

        let content = result?;
        Ok(add_metadata(
            &content,
            &request.module_type,
            &request.complexity,
            Utc::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> FsRequest {
        FsRequest {
            requirement: "  PO over threshold triggers approval ".to_string(),
            module_type: "MM (物料管理)".to_string(),
            complexity: "Medium".to_string(),
            reference_text: None,
            api_key: " sk-test ".to_string(),
            provider: "anthropic".to_string(),
            model: None,
        }
    }

    #[test]
    fn test_prepare_fills_default_model() {
        let config = FsGenerator::new().prepare(&request()).unwrap();
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.api_key, "sk-test");
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_prepare_treats_blank_model_as_missing() {
        let mut req = request();
        req.provider = "deepseek".to_string();
        req.model = Some("  ".to_string());
        let config = FsGenerator::new().prepare(&req).unwrap();
        assert_eq!(config.model, "deepseek-chat");
    }

    #[test]
    fn test_prepare_applies_base_url_override() {
        let generator = FsGenerator::new()
            .with_base_url(Provider::Anthropic, "http://localhost:8080/v1")
            .with_timeout(Some(Duration::from_secs(5)));
        let config = generator.prepare(&request()).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_prompt_trims_reference_text() {
        let mut req = request();
        req.reference_text = Some("  REF-MM-0042 \n\n".to_string());
        let prompt = req.prompt();
        assert!(prompt.contains("REF-MM-0042"));
        assert!(!prompt.contains("  REF-MM-0042"));
        assert!(!prompt.contains("REF-MM-0042 \n"));
        assert!(prompt.contains("PO over threshold triggers approval"));
        assert!(!prompt.contains("  PO over threshold"));
    }

    #[test]
    fn test_prepare_validation_order() {
        let generator = FsGenerator::new();

        let mut req = FsRequest::default();
        assert_eq!(generator.prepare(&req).unwrap_err().user_message(), "请输入业务需求");

        req.requirement = "x".to_string();
        assert_eq!(generator.prepare(&req).unwrap_err().user_message(), "请输入 API Key");

        req.api_key = "sk".to_string();
        assert_eq!(generator.prepare(&req).unwrap_err().user_message(), "请选择 AI 提供商");

        req.provider = "cohere".to_string();
        assert_eq!(
            generator.prepare(&req).unwrap_err().user_message(),
            "不支持的 AI 提供商: cohere"
        );

        req.provider = "openai".to_string();
        req.model = Some("deepseek-chat".to_string());
        assert!(generator.prepare(&req).unwrap_err().is_client_error());
    }
}
