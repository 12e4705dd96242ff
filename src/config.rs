//! Configuration management for Atelier
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Gemini API base URL (without trailing slash)
    pub gemini_api_url: String,
    /// Image-capable Gemini model used for generation
    pub gemini_model: String,
    /// Gemini API key, sent as the `key` query parameter
    pub gemini_api_key: Option<String>,

    /// Upper bound on a single provider call
    pub provider_timeout: Duration,

    /// User id assigned to requests that carry no `userId`
    pub anonymous_user_id: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            host: var("ATELIER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("ATELIER_PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .context("Invalid ATELIER_PORT")?,

            gemini_api_url: var("GEMINI_API_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| {
                    "https://generativelanguage.googleapis.com/v1beta".to_string()
                }),
            gemini_model: var("GEMINI_MODEL")
                .unwrap_or_else(|| "gemini-2.0-flash-preview-image-generation".to_string()),
            gemini_api_key: var("GEMINI_API_KEY")
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),

            provider_timeout: Duration::from_secs(
                var("PROVIDER_TIMEOUT_SECONDS")
                    .unwrap_or_else(|| "120".to_string())
                    .parse()
                    .context("Invalid PROVIDER_TIMEOUT_SECONDS")?,
            ),

            anonymous_user_id: var("ANONYMOUS_USER_ID")
                .unwrap_or_else(|| "anonymous".to_string()),
        })
    }
}
