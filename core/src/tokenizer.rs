//! Breaks names and queries into keywords.
//!
//! Two patterns drive tokenization: matches of the concat pattern are deleted
//! outright (so `bill's` stays one word), then the remaining text is split on
//! the delimiter pattern. Empty segments are dropped and every keyword is
//! lowercased by [`Keyword`] itself.

use crate::types::{Keyword, TokenizerConfig};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const DEFAULT_CONCAT_PATTERN: &str = "[',]";
pub const DEFAULT_DELIMITER_PATTERN: &str = "[^a-zA-Z0-9&]+";

static DEFAULT_CONCAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_CONCAT_PATTERN).expect("default concat pattern"));
static DEFAULT_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_DELIMITER_PATTERN).expect("default delimiter pattern"));

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    concat: Regex,
    delimiter: Regex,
}

impl Tokenizer {
    pub fn new(concat_pattern: &str, delimiter_pattern: &str) -> Result<Self, TokenizerError> {
        Ok(Self {
            concat: compile(concat_pattern)?,
            delimiter: compile(delimiter_pattern)?,
        })
    }

    pub fn from_config(config: &TokenizerConfig) -> Result<Self, TokenizerError> {
        Self::new(&config.concat_pattern, &config.delimiter_pattern)
    }

    /// Returns the keywords of `text` in order of appearance.
    ///
    /// Text made only of delimiter characters (punctuation, emoji, ...) yields
    /// an empty vec.
    pub fn tokenize(&self, text: &str) -> Vec<Keyword> {
        let joined = self.concat.replace_all(text, "");
        let keywords: Vec<Keyword> = self
            .delimiter
            .split(&joined)
            .filter_map(|segment| Keyword::try_new(segment).ok())
            .collect();

        tracing::trace!(
            target: "triemap::tokenizer",
            text,
            keywords = keywords.len(),
            "Tokenized"
        );

        keywords
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            concat: DEFAULT_CONCAT.clone(),
            delimiter: DEFAULT_DELIMITER.clone(),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, TokenizerError> {
    Regex::new(pattern).map_err(|source| TokenizerError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
