//! Provider module
//!
//! Client side of the external multimodal generation service.

pub mod client;
pub mod gemini;
pub mod types;

pub use client::{ImageProvider, ProviderError};
pub use gemini::GeminiProvider;
pub use types::{GenerateContentRequest, ProviderResponse};
