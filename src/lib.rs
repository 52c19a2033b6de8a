//! FS Forge - AI-powered SAP functional specification generator
//!
//! A small HTTP service that turns a business requirement into an SAP FS
//! document by sending a templated prompt to OpenAI, Anthropic or DeepSeek.

pub mod config;
pub mod document;
pub mod error;
pub mod llm;
pub mod prompts;
pub mod server;
pub mod types;

// Re-export commonly used types
pub use config::ServerConfig;
pub use document::{ExportFormat, GeneratedDocument};
pub use error::{FsForgeError, Result};
pub use types::{GenerateOptions, Provider, ProviderConfig};

// Re-export main functionality
pub use llm::{create_client, validate_config, FsGenerator, FsRequest, LlmClient};
pub use prompts::{format_prompt, get_prompt_template, PromptVariables};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    init_tracing();
    Ok(())
}

/// Install the global tracing subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Calling it again is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
