//! Gemini provider
//!
//! Sends prompts to Gemini's `generateContent` endpoint, asking for both an
//! image and a text description.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::{debug, error, info, instrument};

use crate::config::Config;

use super::client::{ImageProvider, ProviderError};
use super::types::{GenerateContentRequest, ProviderResponse};

/// Gemini API client
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    /// Create a new Gemini client
    ///
    /// `client` should carry the configured request timeout.
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.gemini_api_url.clone(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    /// Full `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        let model = self.model.trim();
        let model_path = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        };
        format!("{}/{}:generateContent", self.base_url, model_path)
    }

    /// Build default headers for provider requests
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

#[async_trait]
impl ImageProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;
        let url = self.endpoint();
        let request = GenerateContentRequest::image_and_text(prompt);

        info!(model = %self.model, "Sending generation request to Gemini");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .headers(self.default_headers())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the API key
                let e = e.without_url();
                error!(error = %e, "Failed to send request to Gemini");
                e
            })?;

        let status = response.status();
        debug!(status = %status, "Gemini response status");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini generation request failed");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(reqwest::Error::without_url)?;
        debug!(body_len = bytes.len(), "Gemini response body received");

        ProviderResponse::from_slice(&bytes).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            ProviderError::MalformedBody(e)
        })
    }
}
