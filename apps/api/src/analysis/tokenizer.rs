//! Tokenizer and term-frequency vectors.
//!
//! Text is lowercased, everything outside `[a-z0-9]` and whitespace becomes a
//! space, and the result is split on whitespace. Single-character tokens and a
//! small English stop-word set are dropped.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["the", "a", "an", "and", "or", "to", "of", "in", "on", "for", "with"]
        .into_iter()
        .collect()
});

/// Token -> occurrence count within a single text.
pub type SparseVector = HashMap<String, u32>;

/// Normalizes `text` into its token sequence, preserving order and duplicates.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| token.len() > 1 && !STOP_WORDS.contains(*token))
        .map(str::to_owned)
        .collect()
}

/// Counts occurrences of each token.
pub fn build_vector<S: AsRef<str>>(tokens: &[S]) -> SparseVector {
    let mut vector = SparseVector::with_capacity(tokens.len());
    for token in tokens {
        *vector.entry(token.as_ref().to_owned()).or_insert(0) += 1;
    }
    vector
}

/// Unique tokens in first-occurrence order.
pub fn unique_in_order(tokens: &[String]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(tokens.len());
    tokens
        .iter()
        .map(String::as_str)
        .filter(|token| seen.insert(*token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        let tokens = tokenize("Built AI-driven Screener, v2.0!");
        assert_eq!(tokens, vec!["built", "ai", "driven", "screener", "v2"]);
    }

    #[test]
    fn test_tokenize_drops_stop_words_and_single_chars() {
        let tokens = tokenize("The lead of a team and I built it in Go");
        assert_eq!(tokens, vec!["lead", "team", "built", "it", "go"]);
    }

    #[test]
    fn test_tokenize_empty_and_whitespace_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
        assert!(tokenize("!!! ... ---").is_empty());
    }

    #[test]
    fn test_tokenize_non_ascii_letters_become_separators() {
        assert_eq!(tokenize("résumé naïve"), vec!["sum", "na", "ve"]);
    }

    #[test]
    fn test_tokenize_is_idempotent_on_its_own_output() {
        let text = "Looking for a Senior Engineer, who can design AI systems (2024).";
        let once = tokenize(text);
        let twice = tokenize(&once.join(" "));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_build_vector_counts_occurrences() {
        let vector = build_vector(&tokenize("rust rust go rust"));
        assert_eq!(vector.len(), 2);
        assert_eq!(vector["rust"], 3);
        assert_eq!(vector["go"], 1);
    }

    #[test]
    fn test_build_vector_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(build_vector(&empty).is_empty());
    }

    #[test]
    fn test_unique_in_order_keeps_first_occurrence() {
        let tokens = tokenize("rust go rust python go");
        assert_eq!(unique_in_order(&tokens), vec!["rust", "go", "python"]);
    }
}
