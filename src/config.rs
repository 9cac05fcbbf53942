//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request
//! is made. The binary loads a local `.env` file via `dotenvy` first; the
//! library itself never reads the environment implicitly — the credential is
//! passed explicitly into [`crate::infrastructure::TinyUrlGateway`].
//!
//! ## Required Variables
//!
//! - `TINYURL_API_KEY` - bearer credential for the TinyURL API
//!
//! ## Optional Variables
//!
//! - `TINYURL_API_BASE` - API base URL (default: `https://api.tinyurl.com`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::infrastructure::DEFAULT_API_BASE;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential sent with every shorten request.
    pub api_key: String,
    /// Base URL of the shortening API.
    pub api_base: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TINYURL_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("TINYURL_API_KEY").context("TINYURL_API_KEY must be set")?;

        let api_base = env::var("TINYURL_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_key,
            api_base,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_key` is empty
    /// - `api_base` is not an absolute http(s) URL
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("TINYURL_API_KEY must not be empty");
        }

        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            anyhow::bail!(
                "TINYURL_API_BASE must start with 'http://' or 'https://', got '{}'",
                self.api_base
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API base: {}", self.api_base);
        tracing::info!("  API key: {}", mask_secret(&self.api_key));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only a short recognizable prefix.
fn mask_secret(secret: &str) -> String {
    const VISIBLE: usize = 4;
    if secret.len() <= VISIBLE {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(VISIBLE).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
