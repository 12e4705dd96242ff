//! Response part decoding
//!
//! Every entry of a candidate's `parts` array becomes a [`ResponsePart`].
//! Decoding never fails: shapes that are not a usable image or text payload
//! come out as [`ResponsePart::Unknown`].

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde_json::Value;

use crate::provider::ProviderResponse;

/// Standard alphabet, padding optional
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decoded inline image payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

/// One part of a provider response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePart {
    Image(InlineImage),
    Text(String),
    Unknown,
}

impl ResponsePart {
    /// Decode a single JSON part
    ///
    /// A part carrying an inline-data key is treated as an image attempt
    /// even if it also has `text`; if the image payload is missing, empty or
    /// not valid base64 the part is unknown.
    pub fn decode(part: &Value) -> Self {
        if let Some(inline) = part.get("inlineData").or_else(|| part.get("inline_data")) {
            return decode_inline(inline)
                .map(ResponsePart::Image)
                .unwrap_or(ResponsePart::Unknown);
        }
        match part.get("text").and_then(Value::as_str) {
            Some(text) => ResponsePart::Text(text.to_string()),
            None => ResponsePart::Unknown,
        }
    }
}

fn decode_inline(inline: &Value) -> Option<InlineImage> {
    let data = inline.get("data").and_then(Value::as_str)?;
    let compact: Vec<u8> = data
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if compact.is_empty() {
        return None;
    }
    let data = LENIENT_BASE64.decode(&compact).ok()?;
    let mime_type = inline
        .get("mimeType")
        .or_else(|| inline.get("mime_type"))
        .and_then(Value::as_str)
        .map(str::to_string);
    Some(InlineImage { mime_type, data })
}

/// Decoded parts of the first candidate
///
/// `None` when the body has no `candidates[0].content.parts` array or the
/// array is empty.
pub fn candidate_parts(response: &ProviderResponse) -> Option<Vec<ResponsePart>> {
    let parts = response
        .body
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    if parts.is_empty() {
        return None;
    }
    Some(parts.iter().map(ResponsePart::decode).collect())
}
