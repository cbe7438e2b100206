//! Search result envelope.

use serde::Serialize;

/// Matches for one search term, with their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults<T> {
    /// Number of matches.
    pub count: usize,
    /// The matches, each annotated with its upcoming-show count.
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    /// Wraps matches, counting them.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
