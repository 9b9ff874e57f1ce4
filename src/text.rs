//! # Text Processing Module
//!
//! ## Purpose
//! Text normalization helpers shared by the scoring pipeline: Unicode-aware
//! case folding and whitespace tokenization.
//!
//! ## Input/Output Specification
//! - **Input**: Raw query and document text
//! - **Output**: Folded text and whitespace-delimited tokens
//! - **Determinism**: Folding is a pure function; identical on ASCII input

use unicode_normalization::UnicodeNormalization;

/// Fold text for matching: NFC normalization followed by lowercasing.
///
/// Identity on plain ASCII, so keyword and token comparisons behave as
/// straightforward lowercase matching for English legal text.
pub fn fold(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Split text into whitespace-delimited tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_lowercases() {
        assert_eq!(fold("Section 302 IPC"), "section 302 ipc");
    }

    #[test]
    fn test_fold_is_identity_on_folded_ascii() {
        let folded = fold("murder punishment");
        assert_eq!(fold(&folded), folded);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let tokens: Vec<&str> = tokenize("  right  to\tlife \n").collect();
        assert_eq!(tokens, vec!["right", "to", "life"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("   ").count(), 0);
    }
}
