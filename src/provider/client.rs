//! Image provider abstraction
//!
//! Defines the trait the request pipeline uses to reach a generation
//! backend, so the backend can be swapped or mocked.

use async_trait::async_trait;
use thiserror::Error;

use super::types::ProviderResponse;

/// Failures talking to the provider
///
/// Any of these makes the request fail; none are retried.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider API key is not configured")]
    MissingApiKey,

    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider returned malformed JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Trait defining the interface for image generation providers
///
/// Implementations make exactly one attempt per call. Timeouts are enforced
/// by the HTTP client they are built with.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Get the provider name for logging and metrics
    fn name(&self) -> &'static str;

    /// Whether the provider has the credentials it needs
    fn is_configured(&self) -> bool;

    /// Request an image (and accompanying text) for `prompt`
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;
}
