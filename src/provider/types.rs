//! Gemini `generateContent` wire types
//!
//! The request body is fully typed. The response is kept as raw JSON here
//! and decoded leniently by the response extractor, so a well-formed body of
//! unexpected shape is an extraction failure rather than a transport one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a content entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// Output modality requested from the model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modality {
    Image,
    Text,
}

/// A text part of a request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextPart {
    pub text: String,
}

/// One conversation turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<TextPart>,
}

/// Generation directives
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<Modality>,
}

/// Body of a `generateContent` call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Single user turn asking for both an image and a description
    pub fn image_and_text(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Role::User,
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec![Modality::Image, Modality::Text],
            },
        }
    }
}

/// Raw provider response body
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub body: Value,
}

impl ProviderResponse {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Parse a response body; fails only if the bytes are not JSON
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes).map(Self::new)
    }
}
