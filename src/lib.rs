//! Atelier - Image generation with conversational prompt enhancement
//!
//! This library provides the core functionality for the Atelier server.
//! It remembers the description returned with each user's last image,
//! folds keywords from it into that user's next prompt, forwards the prompt
//! to the image provider and extracts the returned image.

pub mod config;
pub mod error;
pub mod keywords;
pub mod prompt;
pub mod provider;
pub mod response;
pub mod routes;
pub mod session;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::keywords::{extract_keywords, KeywordExtractor};
pub use crate::prompt::PromptEnhancer;
pub use crate::provider::{GeminiProvider, ImageProvider};
pub use crate::session::SessionStore;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Per-user memory of the last provider description
    pub sessions: Arc<SessionStore>,
    /// Prompt enhancer reading from `sessions`
    pub enhancer: Arc<PromptEnhancer>,
    /// Image provider requests are forwarded to
    pub provider: Arc<dyn ImageProvider>,
}

impl AppState {
    /// Create a new application state backed by Gemini
    pub fn new(config: Config) -> Result<Self> {
        // Bound every provider call; the provider itself never retries
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(config.provider_timeout)
            .build()?;

        let provider: Arc<dyn ImageProvider> =
            Arc::new(GeminiProvider::new(http_client, &config));

        Ok(Self::with_provider(config, provider))
    }

    /// Create application state around an arbitrary provider
    pub fn with_provider(config: Config, provider: Arc<dyn ImageProvider>) -> Self {
        let sessions = Arc::new(SessionStore::new());
        let enhancer = Arc::new(PromptEnhancer::new(
            sessions.clone(),
            KeywordExtractor::default(),
        ));

        Self {
            config,
            start_time: Instant::now(),
            sessions,
            enhancer,
            provider,
        }
    }
}
