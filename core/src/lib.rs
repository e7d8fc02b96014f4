//! Shared building blocks for the trie index: keywords, the tokenizer that
//! produces them, and the configuration that drives it.

pub mod error;
pub mod tokenizer;
pub mod types;

pub use error::{Error, Result};
pub use tokenizer::Tokenizer;
pub use types::{Keyword, TokenizerConfig, TrieConfig};
