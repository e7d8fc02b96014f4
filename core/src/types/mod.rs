pub(crate) mod config;
pub use config::{ConfigError, TokenizerConfig, TrieConfig};

pub(crate) mod keyword;
pub use keyword::{Keyword, KeywordError};
