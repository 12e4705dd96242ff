//! Response module
//!
//! Turns a provider response into an image result and advances the user's
//! session with any descriptive text it carries.

pub mod extract;
pub mod parts;

pub use extract::{extract, ExtractionError, GeneratedImage};
pub use parts::{InlineImage, ResponsePart};
