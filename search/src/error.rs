use thiserror::Error;

/// Returned by `TrieMap::remove` when the item is not stored under the name.
///
/// Removal is not transactional: keywords of the name processed before the
/// failing one have already been removed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoveError {
    #[error("keyword not found: {0}")]
    KeywordNotFound(String),

    #[error("item not associated with keyword: {0}")]
    AssociationNotFound(String),
}

impl RemoveError {
    /// The keyword at which removal stopped.
    pub fn keyword(&self) -> &str {
        match self {
            RemoveError::KeywordNotFound(keyword) | RemoveError::AssociationNotFound(keyword) => {
                keyword
            }
        }
    }
}
