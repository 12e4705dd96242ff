//! Response extraction
//!
//! Scans the first candidate's parts once, in order. The first image part
//! becomes the result and the first non-empty text part becomes the user's
//! new session text; later parts of either kind are ignored.

use thiserror::Error;
use tracing::{debug, warn};

use crate::provider::ProviderResponse;
use crate::session::SessionStore;

use super::parts::{candidate_parts, InlineImage, ResponsePart};

/// Provider responses that cannot be turned into an image
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no data: response has no candidate content parts")]
    NoData,

    #[error("no image: response parts contain no inline image")]
    NoImage,
}

/// Successful extraction result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub image: InlineImage,
    /// Whether the response also carried session text
    pub session_updated: bool,
}

/// Pull the image out of `response` and record its text for `user_id`
///
/// The session is updated whenever text is present, even when no image is
/// found and the call fails.
pub fn extract(
    sessions: &SessionStore,
    user_id: &str,
    response: &ProviderResponse,
) -> Result<GeneratedImage, ExtractionError> {
    let parts = candidate_parts(response).ok_or_else(|| {
        warn!(user_id = %user_id, "Provider response has no candidate parts");
        ExtractionError::NoData
    })?;

    let mut image = None;
    let mut text = None;
    let mut unknown = 0usize;

    for part in parts {
        match part {
            ResponsePart::Image(inline) if image.is_none() => image = Some(inline),
            ResponsePart::Text(t) if text.is_none() && !t.is_empty() => text = Some(t),
            ResponsePart::Unknown => unknown += 1,
            _ => {}
        }
    }

    debug!(
        user_id = %user_id,
        has_image = image.is_some(),
        has_text = text.is_some(),
        unknown_parts = unknown,
        "Scanned provider response parts"
    );

    let session_updated = match text {
        Some(text) => {
            sessions.set(user_id, text);
            metrics::counter!("atelier_session_updates_total").increment(1);
            true
        }
        None => false,
    };

    match image {
        Some(image) => Ok(GeneratedImage {
            image,
            session_updated,
        }),
        None => {
            warn!(user_id = %user_id, session_updated, "Provider response has no image part");
            Err(ExtractionError::NoImage)
        }
    }
}
