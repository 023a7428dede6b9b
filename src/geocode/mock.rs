//! Scripted geocoding backend for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::error::GeocodeError;
use super::provider::GeocodeProvider;
use super::types::Coordinate;

/// In-memory [`GeocodeProvider`] with per-query scripted outcomes.
///
/// Unscripted queries return "no result". The call counter covers every
/// invocation, so tests can assert that caching suppressed real calls.
#[derive(Debug, Default)]
pub struct MockGeocodeProvider {
    responses: Mutex<HashMap<String, Coordinate>>,
    failures: Mutex<HashSet<String>>,
    calls: AtomicUsize,
}

impl MockGeocodeProvider {
    /// Creates a provider that knows no addresses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts `query` to resolve to `coordinate`. Matching is
    /// case-insensitive on the trimmed query, like the lookup cache.
    pub fn with_coordinate(self, query: &str, coordinate: Coordinate) -> Self {
        self.responses
            .lock()
            .insert(query.trim().to_lowercase(), coordinate);
        self
    }

    /// Scripts `query` to fail at the transport level.
    pub fn with_failure(self, query: &str) -> Self {
        self.failures.lock().insert(query.trim().to_lowercase());
        self
    }

    /// Number of geocode calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GeocodeProvider for MockGeocodeProvider {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let key = query.trim().to_lowercase();
        if self.failures.lock().contains(&key) {
            return Err(GeocodeError::RequestFailed {
                query: query.to_string(),
                message: "scripted failure".to_string(),
            });
        }

        Ok(self.responses.lock().get(&key).copied())
    }
}
