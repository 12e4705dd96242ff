//! Part-of-speech tagging
//!
//! Defines the tagger seam used by the keyword extractor and the built-in
//! English tagger. Tags follow the Universal Dependencies POS tag set.

use std::fmt;

use super::lexicon;
use super::tokenizer::{normalize_apostrophe, tokenize};

/// Universal part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
}

impl PosTag {
    /// Upper-case tag name as used by UD treebanks
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its surface text and tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub tag: PosTag,
}

/// Tokenizes and tags natural-language text
///
/// Implementations must be deterministic for a fixed input and must not
/// fail: text they cannot make sense of yields fewer (or no) tokens.
pub trait PartOfSpeechTagger: Send + Sync {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Tag every token of `text`, in order
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// Deterministic English tagger driven by word lists, suffix rules and the
/// previous token's tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

/// Left context carried between tokens
#[derive(Debug, Clone, Copy)]
struct Context<'a> {
    sentence_start: bool,
    prev_tag: Option<PosTag>,
    prev_lower: Option<&'a str>,
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    fn tag_token(&self, token: &str, lower: &str, ctx: Context<'_>) -> PosTag {
        if !token.chars().any(char::is_alphanumeric) {
            return punctuation_tag(token);
        }
        if is_numeric(token) {
            return PosTag::Num;
        }

        // "'s" after a pronoun is a contracted "is"
        if lower == "'s" && ctx.prev_tag == Some(PosTag::Pron) {
            return PosTag::Aux;
        }
        if let Some(tag) = lexicon::closed_class(lower) {
            return tag;
        }

        let after_noun_introducer = matches!(ctx.prev_tag, Some(PosTag::Det | PosTag::Adj))
            || ctx.prev_lower.is_some_and(lexicon::is_possessive);

        if lexicon::is_adjective(lower) {
            return PosTag::Adj;
        }
        if lexicon::is_verb(lower) {
            return if after_noun_introducer {
                PosTag::Noun
            } else {
                PosTag::Verb
            };
        }
        if lexicon::is_noun(lower) {
            return PosTag::Noun;
        }

        if !ctx.sentence_start && token.chars().next().is_some_and(char::is_uppercase) {
            return PosTag::Propn;
        }

        let guessed = guess_from_suffix(lower, ctx.prev_tag);
        if guessed == PosTag::Adv {
            return guessed;
        }
        if let Some(prev) = ctx.prev_lower {
            if (prev == "to" && ctx.prev_tag == Some(PosTag::Part))
                || lexicon::is_modal(prev)
                || lexicon::is_subject_pronoun(prev)
            {
                return PosTag::Verb;
            }
        }

        guessed
    }
}

impl PartOfSpeechTagger for LexiconTagger {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let tokens = tokenize(text);
        let lowered: Vec<String> = tokens
            .iter()
            .map(|token| normalize_apostrophe(&token.to_lowercase()))
            .collect();

        let mut tagged = Vec::with_capacity(tokens.len());
        let mut ctx = Context {
            sentence_start: true,
            prev_tag: None,
            prev_lower: None,
        };

        for (token, lower) in tokens.iter().zip(&lowered) {
            let tag = self.tag_token(token, lower, ctx);
            tagged.push(TaggedToken {
                text: token.to_string(),
                tag,
            });

            ctx = Context {
                sentence_start: match tag {
                    PosTag::Punct => ctx.sentence_start || is_sentence_end(token),
                    _ => false,
                },
                prev_tag: Some(tag),
                prev_lower: Some(lower.as_str()),
            };
        }

        tagged
    }
}

fn punctuation_tag(token: &str) -> PosTag {
    let symbolic = token
        .chars()
        .all(|c| matches!(c, '$' | '%' | '&' | '+' | '<' | '=' | '>' | '^' | '|' | '~' | '#' | '@'
            | '\u{00a9}' | '\u{00ae}' | '\u{00b0}' | '\u{20ac}' | '\u{00a3}'));
    if symbolic {
        PosTag::Sym
    } else {
        PosTag::Punct
    }
}

fn is_sentence_end(token: &str) -> bool {
    matches!(token, "." | "!" | "?" | "\u{2026}")
}

fn is_numeric(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '/' | ':'))
}

/// Tag an out-of-vocabulary word from its ending and the previous tag
fn guess_from_suffix(lower: &str, prev_tag: Option<PosTag>) -> PosTag {
    let len = lower.chars().count();
    let follows_clause_head = matches!(
        prev_tag,
        Some(PosTag::Aux | PosTag::Pron | PosTag::Noun | PosTag::Propn | PosTag::Adv)
    );

    if len > 4 && lower.ends_with("ly") {
        return PosTag::Adv;
    }
    if len > 5 && lower.ends_with("ing") {
        return if follows_clause_head || prev_tag.is_none() {
            PosTag::Verb
        } else {
            PosTag::Noun
        };
    }
    if len > 4 && lower.ends_with("ed") {
        return if follows_clause_head {
            PosTag::Verb
        } else {
            PosTag::Adj
        };
    }

    const ADJECTIVE_SUFFIXES: &[(&str, usize)] = &[
        ("ful", 5),
        ("ous", 5),
        ("ive", 5),
        ("able", 6),
        ("ible", 6),
        ("less", 6),
        ("ical", 6),
        ("esque", 7),
        ("ish", 6),
    ];
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|(suffix, min_len)| len >= *min_len && lower.ends_with(suffix))
    {
        return PosTag::Adj;
    }

    PosTag::Noun
}
