//! Error types for Atelier
//!
//! Request-level errors and their mapping onto HTTP responses. Only
//! validation messages reach the caller verbatim; everything else is logged
//! with full detail and answered with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::provider::ProviderError;
use crate::response::ExtractionError;

/// Message returned for every server-side failure
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during image generation.";

/// Message returned when the request carries no prompt
pub const PROMPT_REQUIRED_MESSAGE: &str = "Prompt is required.";

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid JSON in request: {0}")]
    InvalidJson(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] ProviderError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Short label used for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::InvalidJson(_) => "invalid_json",
            AppError::Upstream(_) => "upstream",
            AppError::Extraction(_) => "extraction",
            AppError::Internal(_) => "internal",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidJson(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid JSON in request.".to_string(),
            ),
            AppError::Upstream(e) => {
                error!(error = %e, "Provider call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Extraction(e) => {
                error!(error = %e, "Provider response had no usable image");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                error!(error = %e, "Internal error while generating image");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
