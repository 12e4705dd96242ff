//! Word tokenizer
//!
//! Splits on Unicode word boundaries (UAX #29), drops whitespace, keeps
//! punctuation as separate tokens and peels English clitics off their host
//! word (`cat's` -> `cat` + `'s`, `aren't` -> `are` + `n't`).

use unicode_segmentation::UnicodeSegmentation;

/// Clitic suffixes split from the end of a word, longest first
const CLITICS: &[&str] = &[
    "n't", "n\u{2019}t", "'re", "\u{2019}re", "'ve", "\u{2019}ve", "'ll", "\u{2019}ll", "'s",
    "\u{2019}s", "'m", "\u{2019}m", "'d", "\u{2019}d",
];

/// Tokenize `text` into word and punctuation tokens borrowed from the input
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for segment in text.split_word_bounds() {
        if segment.chars().all(char::is_whitespace) {
            continue;
        }
        match split_clitic(segment) {
            Some((host, clitic)) => {
                tokens.push(host);
                tokens.push(clitic);
            }
            None => tokens.push(segment),
        }
    }
    tokens
}

fn split_clitic(word: &str) -> Option<(&str, &str)> {
    CLITICS.iter().find_map(|clitic| {
        let split_at = word.len().checked_sub(clitic.len())?;
        if split_at == 0 || !word.is_char_boundary(split_at) {
            return None;
        }
        let (host, tail) = word.split_at(split_at);
        tail.eq_ignore_ascii_case(clitic).then_some((host, tail))
    })
}

/// Normalise a clitic spelled with a typographic apostrophe
pub fn normalize_apostrophe(token: &str) -> String {
    token.replace('\u{2019}', "'")
}
