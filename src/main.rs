//! FS Forge - AI-powered SAP functional specification generator
//!
//! Serves the generation API over HTTP. Configuration comes from the
//! environment (see `--help`).

use fs_forge::{server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    // Check for help
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    fs_forge::init()?;

    let config = ServerConfig::from_env()?;
    for (provider, url) in &config.base_urls {
        tracing::info!(provider = %provider, base_url = %url, "Using endpoint override");
    }
    if let Some(timeout) = config.request_timeout {
        tracing::info!(timeout_secs = timeout.as_secs(), "Outbound request timeout configured");
    }

    let state = server::AppState {
        generator: config.generator(),
    };
    server::serve(config.bind_addr, state).await?;

    Ok(())
}

/// Print help information
fn print_help() {
    println!("FS Forge - AI-powered SAP functional specification generator");
    println!();
    println!("USAGE:");
    println!("    fs-forge");
    println!();
    println!("ENDPOINTS:");
    println!("    POST /api/generate   Generate an FS document");
    println!("    POST /api/export     Download a document as Markdown or HTML");
    println!("    GET  /api/catalog    Providers, models, modules and complexity levels");
    println!("    GET  /api/health     Liveness check");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    FSGEN_BIND_ADDR              Listen address (default: 127.0.0.1:3000)");
    println!("    FSGEN_OPENAI_BASE_URL        OpenAI endpoint override (/v1 added if missing)");
    println!("    FSGEN_ANTHROPIC_BASE_URL     Anthropic endpoint override (/v1 added if missing)");
    println!("    FSGEN_DEEPSEEK_BASE_URL      DeepSeek endpoint override (used as given)");
    println!("    FSGEN_REQUEST_TIMEOUT_SECS   Deadline for vendor calls (default: none)");
    println!("    RUST_LOG                     Log filter (default: info)");
    println!();
    println!("API keys are supplied per request and never stored.");
}
