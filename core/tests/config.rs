use tempfile::TempDir;
use triemap_core::types::ConfigError;
use triemap_core::{Tokenizer, TokenizerConfig, TrieConfig};

/// Verify a missing config file falls back to the default patterns.
#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let config = TrieConfig::load(&TrieConfig::path(dir.path())).unwrap();

    assert_eq!(config, TrieConfig::default());
    assert_eq!(config.tokenizer.concat_pattern, "[',]");
    assert_eq!(config.tokenizer.delimiter_pattern, "[^a-zA-Z0-9&]+");
}

/// Verify saved patterns survive a reload.
#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = TrieConfig::path(dir.path());
    let config = TrieConfig {
        tokenizer: TokenizerConfig {
            concat_pattern: String::new(),
            delimiter_pattern: "$".to_string(),
        },
    };

    config.save(&path).unwrap();
    let loaded = TrieConfig::load(&path).unwrap();

    assert_eq!(loaded, config);
}

/// Verify omitted keys take their default values.
#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = TrieConfig::path(dir.path());
    std::fs::write(&path, "[tokenizer]\ndelimiter_pattern = \"\\\\s+\"\n").unwrap();

    let config = TrieConfig::load(&path).unwrap();

    assert_eq!(config.tokenizer.concat_pattern, "[',]");
    assert_eq!(config.tokenizer.delimiter_pattern, "\\s+");
}

/// Verify malformed TOML surfaces as a parse error.
#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = TrieConfig::path(dir.path());
    std::fs::write(&path, "[tokenizer\n").unwrap();

    let err = TrieConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
}

/// Verify validation reports each pattern that fails to compile.
#[test]
fn test_validate_reports_invalid_patterns() {
    let mut config = TrieConfig::default();
    assert!(config.validate().is_empty());

    config.tokenizer.concat_pattern = "(".to_string();
    config.tokenizer.delimiter_pattern = "[".to_string();

    let errors = config.validate();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("concat_pattern"));
    assert!(errors[1].starts_with("delimiter_pattern"));
}

/// Verify invalid patterns are swapped for defaults and valid ones kept.
#[test]
fn test_with_defaults_for_invalid() {
    let mut config = TrieConfig::default();
    config.tokenizer.concat_pattern = "(".to_string();
    config.tokenizer.delimiter_pattern = "\\s+".to_string();

    let fixed = config.with_defaults_for_invalid();

    assert_eq!(fixed.tokenizer.concat_pattern, "[',]");
    assert_eq!(fixed.tokenizer.delimiter_pattern, "\\s+");
    assert!(fixed.validate().is_empty());
    Tokenizer::from_config(&fixed.tokenizer).unwrap();
}
