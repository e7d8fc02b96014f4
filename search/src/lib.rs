//! Prefix-matching, multi-word trie index.
//!
//! Maps free-text names to items. A name such as `"sharp cheddar cheese"` is
//! split into keywords and each keyword is stored as a path in a
//! character-keyed trie, with the item attached at the keyword's last node.
//!
//! # Design
//!
//! - Nodes live in an arena addressed by index; each node keeps its parent's
//!   index so removal can prune upward without owning pointers.
//! - A query token matches every keyword in the subtree below the token's
//!   node, so `"shar"` finds both `"sharp"` and `"sharpener"`.
//! - Multi-token queries intersect per-token matches: an item is returned only
//!   if every token prefixes one of its keywords.
//! - Each match carries a [`SearchResult`] (aligned positions, match
//!   proportion) that a caller-supplied comparator ranks.
//! - Removal prunes unary chains that no longer lead to an item, so every node
//!   left in the trie either branches or holds an item.
//!
//! Everything is synchronous and in memory. The trie is rebuilt from source
//! data on every start.

mod engine;
mod error;
mod results;

pub use engine::TrieMap;
pub use error::RemoveError;
pub use results::{Comparator, SearchResult};
pub use triemap_core::{Keyword, Tokenizer, TokenizerConfig, TrieConfig};
