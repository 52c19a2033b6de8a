//! Error handling for fs-forge

use thiserror::Error;

/// Main error type for fs-forge
#[derive(Error, Debug, Clone)]
pub enum FsForgeError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unsupported provider: {provider}")]
    UnsupportedProvider { provider: String },

    #[error("{provider} API call failed: {message}")]
    Provider {
        provider: crate::types::Provider,
        message: String,
        status_code: Option<u16>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FsForgeError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unsupported provider error
    pub fn unsupported_provider(provider: impl Into<String>) -> Self {
        Self::UnsupportedProvider {
            provider: provider.into(),
        }
    }

    /// Create a provider (vendor call) error
    pub fn provider(
        provider: crate::types::Provider,
        message: impl Into<String>,
        status_code: Option<u16>,
    ) -> Self {
        Self::Provider {
            provider,
            message: message.into(),
            status_code,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the caller is at fault (maps to a 4xx response)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::Config { .. } | Self::UnsupportedProvider { .. }
        )
    }

    /// HTTP status code this error is surfaced with
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }

    /// Message shown to the end user.
    ///
    /// Validation and configuration messages are returned bare; vendor
    /// failures keep the vendor tag so the user knows which API failed.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message } | Self::Config { message } => message.clone(),
            Self::UnsupportedProvider { provider } => format!("不支持的 AI 提供商: {}", provider),
            Self::Provider { .. } => self.to_string(),
            Self::Internal { message } => message.clone(),
        }
    }
}

impl From<serde_json::Error> for FsForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<std::io::Error> for FsForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FsForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::FsForgeError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::FsForgeError::validation(format!($fmt, $($arg)*))
    };
}
