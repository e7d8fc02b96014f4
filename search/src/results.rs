//! Per-item match state built during a search, and the ordering callers
//! supply over it.

use std::cmp::Ordering;
use std::sync::Arc;

/// Orders search results; the greatest result is returned first.
///
/// Results that compare `Equal` come back in unspecified relative order.
pub type Comparator<T> =
    Arc<dyn Fn(&SearchResult<'_, T>, &SearchResult<'_, T>) -> Ordering + Send + Sync>;

/// An item selected by a search, with the data used to rank it.
///
/// Lives for a single `search` call. One result is created per item for each
/// query token and the results of successive tokens are combined, so
/// `match_count` is the number of query tokens the item matched.
#[derive(Debug, Clone)]
pub struct SearchResult<'a, T> {
    item: &'a T,
    match_table: Vec<bool>,
    match_count: usize,
    keyword_count: usize,
    match_proportion: f32,
}

impl<'a, T> SearchResult<'a, T> {
    pub(crate) fn new(
        item: &'a T,
        query_index: usize,
        keyword_index: usize,
        query_len: usize,
        keyword_count: usize,
    ) -> Self {
        let mut match_table = vec![false; query_len];
        if query_index == keyword_index
            && let Some(aligned) = match_table.get_mut(query_index)
        {
            *aligned = true;
        }

        let mut result = Self {
            item,
            match_table,
            match_count: 0,
            keyword_count,
            match_proportion: 0.0,
        };
        result.record_match();
        result
    }

    /// Folds in another keyword of the same item matched by the same query
    /// token. Alignment is kept if either keyword lines up; the count is not
    /// touched.
    pub(crate) fn absorb(&mut self, other: &Self) {
        self.merge_alignment(other);
    }

    /// Intersects with the result of the next query token for the same item.
    pub(crate) fn combine(&mut self, other: &Self) {
        self.record_match();
        self.merge_alignment(other);
    }

    pub fn item(&self) -> &'a T {
        self.item
    }

    /// True if query token `n` is also keyword `n` of the item's name.
    pub fn match_at(&self, n: usize) -> bool {
        self.match_table.get(n).copied().unwrap_or(false)
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Number of keywords in the item's name.
    pub fn keyword_count(&self) -> usize {
        self.keyword_count
    }

    /// Matches so far divided by the item's keyword count.
    pub fn match_proportion(&self) -> f32 {
        self.match_proportion
    }

    fn record_match(&mut self) {
        self.match_count += 1;
        self.match_proportion = self.match_count as f32 / self.keyword_count as f32;
    }

    fn merge_alignment(&mut self, other: &Self) {
        for (mine, theirs) in self.match_table.iter_mut().zip(&other.match_table) {
            *mine |= *theirs;
        }
    }
}
