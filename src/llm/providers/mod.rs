//! LLM provider implementations
//!
//! Each provider is implemented in its own module. The helpers here cover
//! what the vendors share: chat message shapes, HTTP client construction and
//! the uniform error mapping for failed calls.

pub mod anthropic;
pub mod deepseek;
pub mod openai;

// Re-export providers for easy access
pub use anthropic::AnthropicClient;
pub use deepseek::DeepSeekClient;
pub use openai::OpenAiClient;

use crate::error::{FsForgeError, Result};
use crate::types::{Provider, ProviderConfig};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// Returned in place of an error when a vendor answers with no text
pub const EMPTY_RESPONSE_FALLBACK: &str = "生成失败";

/// Chat message shared by the OpenAI-compatible and Anthropic bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Vendor error envelope: `{"error": {"message": "..."}}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Build the HTTP client for one provider.
///
/// Without a configured timeout the transport default applies.
pub(crate) fn build_http_client(config: &ProviderConfig, provider: Provider) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| FsForgeError::provider(provider, format!("failed to build HTTP client: {}", e), None))
}

/// Require a non-empty API key before any client is built
pub(crate) fn require_api_key(config: &ProviderConfig, provider: Provider) -> Result<String> {
    let api_key = config.api_key.trim();
    if api_key.is_empty() {
        return Err(FsForgeError::config(format!("{} API key is required", provider)));
    }
    Ok(api_key.to_string())
}

/// Join a vendor base URL and endpoint, adding `/v1` when the base lacks it.
///
/// Overrides may be given with or without the version segment.
pub(crate) fn versioned_url(base_url: &str, endpoint: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    if base_url.ends_with("/v1") {
        format!("{}{}", base_url, endpoint)
    } else {
        format!("{}/v1{}", base_url, endpoint)
    }
}

/// Map a transport failure to the uniform provider error
pub(crate) fn network_error(provider: Provider, err: reqwest::Error) -> FsForgeError {
    let detail = if err.is_timeout() {
        format!("request timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    };
    FsForgeError::provider(provider, detail, None)
}

/// Turn a non-2xx response into the uniform provider error.
///
/// Uses the vendor's `error.message` when the body carries one, otherwise
/// `<Vendor> API error: <status>`.
pub(crate) async fn status_error(provider: Provider, response: Response) -> FsForgeError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = vendor_error_message(&body)
        .unwrap_or_else(|| format!("{} API error: {}", provider, status));
    FsForgeError::provider(provider, message, Some(status))
}

fn vendor_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()?
        .error?
        .message
        .filter(|m| !m.trim().is_empty())
}

/// Parse a successful response body
pub(crate) async fn parse_body<T: for<'de> Deserialize<'de>>(
    provider: Provider,
    response: Response,
) -> Result<T> {
    let status = response.status().as_u16();
    response.json::<T>().await.map_err(|e| {
        FsForgeError::provider(provider, format!("invalid response body: {}", e), Some(status))
    })
}

/// Fall back to [`EMPTY_RESPONSE_FALLBACK`] for missing or empty text
pub(crate) fn text_or_fallback(text: Option<String>) -> String {
    match text {
        Some(text) if !text.is_empty() => text,
        _ => EMPTY_RESPONSE_FALLBACK.to_string(),
    }
}
