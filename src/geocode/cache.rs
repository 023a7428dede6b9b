use std::collections::HashMap;

use parking_lot::Mutex;

use super::types::Coordinate;

/// Normalizes a query for cache lookup: lower-cased and trimmed.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Per-run map from normalized query to its lookup outcome.
///
/// `Some(coord)` records a hit, `None` records "no result" (including
/// transport failures), so a failing query is never retried within a run.
/// Shared by both dataset resolutions and never invalidated mid-run.
#[derive(Debug, Default)]
pub struct LookupCache {
    entries: Mutex<HashMap<String, Option<Coordinate>>>,
}

impl LookupCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached outcome for `query`, if the normalized form has
    /// been seen. The outer `Option` distinguishes "never looked up" from
    /// a cached "no result".
    pub fn get(&self, query: &str) -> Option<Option<Coordinate>> {
        self.entries.lock().get(&normalize_query(query)).copied()
    }

    /// Records the outcome for `query` under its normalized form.
    pub fn insert(&self, query: &str, outcome: Option<Coordinate>) {
        self.entries.lock().insert(normalize_query(query), outcome);
    }

    /// Number of distinct normalized queries seen.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` when no query has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
