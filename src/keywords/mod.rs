//! Keyword extraction
//!
//! Distils descriptive text into the nouns and adjectives used to bias the
//! next prompt.

pub mod lexicon;
pub mod tagger;
pub mod tokenizer;

use std::sync::Arc;

pub use self::tagger::{LexiconTagger, PartOfSpeechTagger, PosTag, TaggedToken};

/// Keywords must be strictly longer than this many characters
pub const MIN_KEYWORD_CHARS_EXCLUSIVE: usize = 2;

/// Extracts candidate keywords from free text
///
/// Keeps tokens tagged NOUN or ADJ whose length exceeds
/// [`MIN_KEYWORD_CHARS_EXCLUSIVE`], in their original order. Duplicates are
/// kept.
#[derive(Clone)]
pub struct KeywordExtractor {
    tagger: Arc<dyn PartOfSpeechTagger>,
}

impl KeywordExtractor {
    /// Create an extractor on top of the given tagger
    pub fn new(tagger: Arc<dyn PartOfSpeechTagger>) -> Self {
        Self { tagger }
    }

    /// Name of the underlying tagger
    pub fn tagger_name(&self) -> &'static str {
        self.tagger.name()
    }

    /// Extract keywords from `text`; empty for empty or non-linguistic input
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.tagger
            .tag(text)
            .into_iter()
            .filter(|token| matches!(token.tag, PosTag::Noun | PosTag::Adj))
            .filter(|token| token.text.chars().count() > MIN_KEYWORD_CHARS_EXCLUSIVE)
            .map(|token| token.text)
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Arc::new(LexiconTagger::new()))
    }
}

impl std::fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordExtractor")
            .field("tagger", &self.tagger.name())
            .finish()
    }
}

/// Extract keywords with the built-in English tagger
pub fn extract_keywords(text: &str) -> Vec<String> {
    KeywordExtractor::default().extract(text)
}
