//! Prompt module
//!
//! Enriches incoming prompts with context from the user's previous generation.

pub mod enhancer;

pub use self::enhancer::{PromptEnhancer, KEYWORD_SUFFIX};
