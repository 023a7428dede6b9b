use std::collections::HashMap;

use parking_lot::Mutex;

use crate::geocode::Coordinate;

/// Cache key for a directed coordinate pair, at ~0.1 m precision.
fn pair_key(from: Coordinate, to: Coordinate) -> String {
    format!(
        "{:.6},{:.6};{:.6},{:.6}",
        from.lat, from.lon, to.lat, to.lon
    )
}

/// Per-run map from coordinate pair to its routing outcome.
///
/// Separate namespace from the geocoding [`LookupCache`](crate::geocode::LookupCache):
/// the query shape differs (coordinate pairs, not text). `None` records a
/// failed or routeless lookup so the pair is not re-queried within a run.
#[derive(Debug, Default)]
pub struct RouteCache {
    entries: Mutex<HashMap<String, Option<f64>>>,
}

impl RouteCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached outcome for the pair, if it has been seen.
    pub fn get(&self, from: Coordinate, to: Coordinate) -> Option<Option<f64>> {
        self.entries.lock().get(&pair_key(from, to)).copied()
    }

    /// Records the outcome for the pair.
    pub fn insert(&self, from: Coordinate, to: Coordinate, outcome: Option<f64>) {
        self.entries.lock().insert(pair_key(from, to), outcome);
    }

    /// Number of distinct coordinate pairs seen.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` when no pair has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
