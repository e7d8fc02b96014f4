mod graph;

use crate::error::RemoveError;
use crate::results::{Comparator, SearchResult};
use graph::{Association, Graph, NodeId};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use triemap_core::{Keyword, Tokenizer, TrieConfig};

/// A query token with no path in the trie. No item can match the query.
struct NoMatch;

/// Maps free-text names to items and finds them again by prefix.
///
/// A name is broken into keywords by the [`Tokenizer`]. A query matches an
/// item when every query keyword is a prefix of some keyword of the item's
/// name, so searching for the exact name always finds the item.
///
/// The map is not synchronized. Share it behind a lock (e.g.
/// `Arc<RwLock<TrieMap<T>>>`) when it is mutated from several threads.
pub struct TrieMap<T> {
    graph: Graph<T>,
    tokenizer: Tokenizer,
    comparator: Option<Comparator<T>>,
}

/// Create operations.
impl<T> TrieMap<T> {
    /// Creates an empty map with the default tokenizer. Results are unordered.
    pub fn new() -> Self {
        Self::with_tokenizer(Tokenizer::default())
    }

    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self {
            graph: Graph::new(),
            tokenizer,
            comparator: None,
        }
    }

    pub fn from_config(config: &TrieConfig) -> triemap_core::Result<Self> {
        let tokenizer = Tokenizer::from_config(&config.tokenizer)?;
        Ok(Self::with_tokenizer(tokenizer))
    }

    /// Orders search results so that the greatest result under `comparator`
    /// comes first.
    pub fn with_comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&SearchResult<'_, T>, &SearchResult<'_, T>) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Some(Arc::new(comparator));
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Number of trie nodes currently in use, not counting the root.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn clear(&mut self) {
        self.graph.clear();
    }
}

/// Mutation operations.
impl<T: Eq + Hash + Clone> TrieMap<T> {
    /// Stores `item` under every keyword of `name`.
    ///
    /// A name without keywords stores nothing. Putting the same item under the
    /// same name twice stores it twice; it then takes two removals to drop it.
    pub fn put(&mut self, name: &str, item: T) {
        let keywords = self.tokenizer.tokenize(name);
        let keyword_count = keywords.len();

        for (keyword_index, keyword) in keywords.iter().enumerate() {
            tracing::trace!(
                target: "triemap::search",
                keyword = %keyword,
                keyword_index,
                keyword_count,
                "Inserting keyword"
            );
            self.graph.insert(
                keyword,
                Association {
                    item: item.clone(),
                    keyword_index,
                    keyword_count,
                },
            );
        }
    }

    /// Removes `item` from every keyword of `name`, pruning branches that no
    /// longer lead to any item.
    ///
    /// Fails at the first keyword that has no node, or whose node does not hold
    /// `item`. Keywords before that one stay removed.
    pub fn remove(&mut self, name: &str, item: &T) -> Result<(), RemoveError> {
        let keywords = self.tokenizer.tokenize(name);
        let mut pruned = 0;

        for keyword in &keywords {
            let Some(node) = self.graph.locate(keyword) else {
                tracing::debug!(target: "triemap::search", keyword = %keyword, "Keyword not found");
                return Err(RemoveError::KeywordNotFound(keyword.to_string()));
            };
            if !self.graph.remove_association(node, item) {
                tracing::debug!(target: "triemap::search", keyword = %keyword, "Item not associated");
                return Err(RemoveError::AssociationNotFound(keyword.to_string()));
            }
            pruned += self.graph.prune(node);
        }

        tracing::debug!(
            target: "triemap::search",
            name,
            keywords = keywords.len(),
            pruned,
            "Removed item"
        );
        Ok(())
    }
}

/// Search operations.
impl<T: Eq + Hash + Clone> TrieMap<T> {
    /// Returns every item whose name has, for each keyword of `query`, a
    /// keyword starting with it.
    ///
    /// Results are ordered by the comparator, greatest first. A query without
    /// keywords returns nothing.
    pub fn search(&self, query: &str) -> Vec<&T> {
        let keywords = self.tokenizer.tokenize(query);
        if keywords.is_empty() {
            return Vec::new();
        }

        let results = match self.intersect(&keywords) {
            Ok(results) => self.rank(results),
            Err(NoMatch) => Vec::new(),
        };

        tracing::debug!(
            target: "triemap::search",
            query,
            tokens = keywords.len(),
            results = results.len(),
            "Search completed"
        );
        results
    }

    /// Every stored item, once each.
    pub fn items(&self) -> HashSet<&T> {
        self.graph
            .associations_below(NodeId::ROOT)
            .map(|association| &association.item)
            .collect()
    }

    /// Keeps the items matched by every keyword, combining their results.
    fn intersect<'a>(&'a self, keywords: &[Keyword]) -> Result<Vec<SearchResult<'a, T>>, NoMatch> {
        let query_len = keywords.len();
        let mut results = HashMap::new();

        for (position, keyword) in keywords.iter().enumerate() {
            let matches = self.keyword_matches(keyword, position, query_len)?;
            if position == 0 {
                results = matches;
                continue;
            }

            results = results
                .into_iter()
                .filter_map(|(item, mut result)| {
                    result.combine(matches.get(item)?);
                    Some((item, result))
                })
                .collect();
        }

        Ok(results.into_values().collect())
    }

    /// One result per item holding a keyword that starts with `keyword`.
    fn keyword_matches<'a>(
        &'a self,
        keyword: &str,
        position: usize,
        query_len: usize,
    ) -> Result<HashMap<&'a T, SearchResult<'a, T>>, NoMatch> {
        let node = self.graph.locate(keyword).ok_or(NoMatch)?;
        let mut matches: HashMap<&'a T, SearchResult<'a, T>> = HashMap::new();

        for association in self.graph.associations_below(node) {
            let result = SearchResult::new(
                &association.item,
                position,
                association.keyword_index,
                query_len,
                association.keyword_count,
            );
            match matches.entry(&association.item) {
                Entry::Occupied(mut entry) => entry.get_mut().absorb(&result),
                Entry::Vacant(entry) => {
                    entry.insert(result);
                }
            }
        }

        Ok(matches)
    }

    fn rank<'a>(&self, mut results: Vec<SearchResult<'a, T>>) -> Vec<&'a T> {
        if let Some(comparator) = &self.comparator {
            results.sort_by(|a, b| comparator(b, a));
        }
        results.iter().map(SearchResult::item).collect()
    }
}

impl<T> Default for TrieMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>, T: Eq + Hash + Clone> Extend<(S, T)> for TrieMap<T> {
    fn extend<I: IntoIterator<Item = (S, T)>>(&mut self, iter: I) {
        for (name, item) in iter {
            self.put(name.as_ref(), item);
        }
    }
}

/// Renders the trie shape, e.g. `root{b{one,roth}}`.
///
/// Children are sorted by character. A node with a single child prints
/// directly followed by that child, so unary chains read as one word.
impl<T> fmt::Display for TrieMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.graph, f)
    }
}
