use crate::tokenizer::{DEFAULT_CONCAT_PATTERN, DEFAULT_DELIMITER_PATTERN};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Index configuration, persisted as triemap.toml.
///
/// Only describes how names are broken into keywords; the trie itself is
/// rebuilt from source data on every start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

impl TrieConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("triemap.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(
                target: "triemap::config",
                path = %path.display(),
                "No config file, using defaults"
            );
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns one message per pattern that does not compile.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Err(e) = Regex::new(&self.tokenizer.concat_pattern) {
            errors.push(format!("concat_pattern is not a valid regex: {e}"));
        }

        if let Err(e) = Regex::new(&self.tokenizer.delimiter_pattern) {
            errors.push(format!("delimiter_pattern is not a valid regex: {e}"));
        }

        errors
    }

    /// Returns a validated config, replacing invalid patterns with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = TokenizerConfig::default();
        let pick = |value: &str, default: String, field: &str| {
            if Regex::new(value).is_ok() {
                value.to_string()
            } else {
                tracing::warn!(
                    target: "triemap::config",
                    field,
                    pattern = value,
                    "Invalid pattern replaced with default"
                );
                default
            }
        };

        Self {
            tokenizer: TokenizerConfig {
                concat_pattern: pick(
                    &self.tokenizer.concat_pattern,
                    defaults.concat_pattern,
                    "concat_pattern",
                ),
                delimiter_pattern: pick(
                    &self.tokenizer.delimiter_pattern,
                    defaults.delimiter_pattern,
                    "delimiter_pattern",
                ),
            },
        }
    }
}

/// Patterns used to break a name into keywords.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Matches are deleted and the text on either side joined, e.g. `bill's` -> `bills`.
    #[serde(default = "default_concat_pattern")]
    pub concat_pattern: String,
    /// Matches separate one keyword from the next.
    #[serde(default = "default_delimiter_pattern")]
    pub delimiter_pattern: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            concat_pattern: default_concat_pattern(),
            delimiter_pattern: default_delimiter_pattern(),
        }
    }
}

fn default_concat_pattern() -> String {
    DEFAULT_CONCAT_PATTERN.to_string()
}

fn default_delimiter_pattern() -> String {
    DEFAULT_DELIMITER_PATTERN.to_string()
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
