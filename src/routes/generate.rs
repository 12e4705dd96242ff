//! Image generation endpoint
//!
//! Validates the request, enhances the prompt from session memory, calls the
//! provider once and returns the first image as base64.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    error::{AppError, AppResult, PROMPT_REQUIRED_MESSAGE},
    response::extract,
    routes::metrics::record_generation,
    AppState,
};

/// Generation request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Successful generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    /// Base64-encoded image bytes
    pub image: String,
}

/// Handle image generation requests
#[instrument(skip_all)]
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateImageRequest>, JsonRejection>,
) -> AppResult<Json<GenerateImageResponse>> {
    let start_time = Instant::now();

    let result = generate(&state, payload).await;

    let outcome = match &result {
        Ok(_) => "success",
        Err(e) => e.kind(),
    };
    record_generation(outcome, start_time.elapsed().as_secs_f64());

    result
}

async fn generate(
    state: &AppState,
    payload: Result<Json<GenerateImageRequest>, JsonRejection>,
) -> AppResult<Json<GenerateImageResponse>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidJson(e.body_text()))?;

    let prompt = request
        .prompt
        .filter(|prompt| !prompt.is_empty())
        .ok_or_else(|| AppError::Validation(PROMPT_REQUIRED_MESSAGE.to_string()))?;
    let user_id = request
        .user_id
        .unwrap_or_else(|| state.config.anonymous_user_id.clone());

    // Keyword extraction is CPU-bound
    let enhancer = state.enhancer.clone();
    let enhanced_prompt = {
        let user_id = user_id.clone();
        tokio::task::spawn_blocking(move || enhancer.enhance(&user_id, &prompt))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Prompt enhancement failed: {}", e)))?
    };

    let response = state.provider.generate(&enhanced_prompt).await?;
    let generated = extract(&state.sessions, &user_id, &response)?;

    info!(
        user_id = %user_id,
        provider = state.provider.name(),
        image_bytes = generated.image.data.len(),
        session_updated = generated.session_updated,
        "Image generated"
    );

    Ok(Json(GenerateImageResponse {
        image: BASE64.encode(&generated.image.data),
    }))
}
