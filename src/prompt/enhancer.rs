//! Prompt enhancer
//!
//! Appends keywords distilled from the user's last provider description to
//! the new prompt.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::keywords::KeywordExtractor;
use crate::session::SessionStore;

/// Literal placed between the prompt and the keyword list
pub const KEYWORD_SUFFIX: &str = " with these keywords from previous image: ";

/// Combines new prompts with keywords from session memory
pub struct PromptEnhancer {
    sessions: Arc<SessionStore>,
    extractor: KeywordExtractor,
}

impl PromptEnhancer {
    /// Create an enhancer reading from `sessions`
    pub fn new(sessions: Arc<SessionStore>, extractor: KeywordExtractor) -> Self {
        Self {
            sessions,
            extractor,
        }
    }

    /// Build the prompt sent upstream for `user_id`
    ///
    /// Returns `prompt` unchanged when the user has no stored text or the
    /// stored text yields no keywords.
    #[instrument(skip(self, prompt), fields(user_id = %user_id))]
    pub fn enhance(&self, user_id: &str, prompt: &str) -> String {
        let keywords = match self.sessions.get(user_id) {
            Some(previous) if !previous.is_empty() => self.extractor.extract(&previous),
            _ => {
                debug!("No previous response text for user");
                Vec::new()
            }
        };

        metrics::counter!("atelier_prompt_keywords_total").increment(keywords.len() as u64);

        let enhanced = if keywords.is_empty() {
            prompt.to_string()
        } else {
            format!("{}{}{}", prompt, KEYWORD_SUFFIX, keywords.join(", "))
        };

        info!(original_prompt = %prompt, enhanced_prompt = %enhanced, "Prompt prepared");
        enhanced
    }
}
