use thiserror::Error;

pub use crate::tokenizer::TokenizerError;
pub use crate::types::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
