//! Word extraction from raw text.
//!
//! A token is a maximal run of ASCII letters at least `min_len` long. Digits,
//! underscores, punctuation, whitespace and non-ASCII characters all end a run.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{check_min_token_len, DraftError, DraftResult};

/// Minimum token length used when nothing else is configured.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

static DEFAULT_TOKENIZER: Lazy<Tokenizer> = Lazy::new(|| {
    Tokenizer::new(DEFAULT_MIN_TOKEN_LEN).expect("default token pattern is valid")
});

/// Extracts alphabetic tokens from text.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    min_len: usize,
}

impl Tokenizer {
    /// Create a tokenizer matching runs of at least `min_len` letters.
    pub fn new(min_len: usize) -> DraftResult<Self> {
        check_min_token_len(min_len)?;

        // Explicit ASCII class: `(?i)[a-z]` would also match the Kelvin sign and long s.
        let pattern = Regex::new(&format!("[A-Za-z]{{{min_len},}}"))
            .map_err(|e| DraftError::Config(format!("invalid token pattern: {e}")))?;

        Ok(Self { pattern, min_len })
    }

    /// Minimum token length.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// All tokens in document order, duplicates included.
    pub fn tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Distinct tokens in first-seen order. Comparison is case-sensitive.
    pub fn unique<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.pattern.find_iter(text).map(|m| m.as_str()).filter(|t| seen.insert(*t)).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        DEFAULT_TOKENIZER.clone()
    }
}

/// Extract every token of length 3 or more.
pub fn extract_tokens(text: &str) -> Vec<&str> {
    DEFAULT_TOKENIZER.tokens(text)
}

/// Extract distinct tokens of length 3 or more, in first-seen order.
pub fn unique_tokens(text: &str) -> Vec<&str> {
    DEFAULT_TOKENIZER.unique(text)
}
