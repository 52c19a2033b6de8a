//! Server configuration loaded from the environment (and `.env`)

use crate::error::{FsForgeError, Result};
use crate::llm::FsGenerator;
use crate::types::Provider;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

pub const ENV_BIND_ADDR: &str = "FSGEN_BIND_ADDR";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "FSGEN_REQUEST_TIMEOUT_SECS";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Runtime settings for the HTTP service
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Per-provider endpoint overrides
    pub base_urls: HashMap<Provider, String>,
    /// Deadline for outbound vendor calls; `None` keeps the transport default
    pub request_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            base_urls: HashMap::new(),
            request_timeout: None,
        }
    }
}

/// Environment variable holding the endpoint override for `provider`
pub fn base_url_var(provider: Provider) -> String {
    format!("FSGEN_{}_BASE_URL", provider.as_str().to_uppercase())
}

impl ServerConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = read(ENV_BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| FsForgeError::config(format!("Invalid {}: {}", ENV_BIND_ADDR, e)))?;

        let mut base_urls = HashMap::new();
        for provider in Provider::ALL {
            if let Some(url) = read(&base_url_var(provider)) {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(FsForgeError::config(format!(
                        "Invalid {}: expected an http(s) URL, got {}",
                        base_url_var(provider),
                        url
                    )));
                }
                base_urls.insert(provider, url);
            }
        }

        let request_timeout = match read(ENV_REQUEST_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| {
                    FsForgeError::config(format!("Invalid {}: {}", ENV_REQUEST_TIMEOUT_SECS, e))
                })?;
                if secs == 0 {
                    return Err(FsForgeError::config(format!(
                        "{} must be greater than zero",
                        ENV_REQUEST_TIMEOUT_SECS
                    )));
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            bind_addr,
            base_urls,
            request_timeout,
        })
    }

    /// Build the generator these settings describe
    pub fn generator(&self) -> FsGenerator {
        self.base_urls
            .iter()
            .fold(FsGenerator::new(), |generator, (provider, url)| {
                generator.with_base_url(*provider, url.clone())
            })
            .with_timeout(self.request_timeout)
    }
}
