//! Scripted routing backend for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::geocode::Coordinate;

use super::error::RefineError;
use super::provider::RoutingProvider;

fn key(from: Coordinate, to: Coordinate) -> String {
    format!(
        "{:.4},{:.4};{:.4},{:.4}",
        from.lat, from.lon, to.lat, to.lon
    )
}

/// In-memory [`RoutingProvider`] with scripted per-pair outcomes.
///
/// Unscripted pairs fail at the transport level, which the refiner records as
/// an unrefined pair. Use [`with_route`](Self::with_route) for distances and
/// [`with_no_route`](Self::with_no_route) for an explicit "no route found".
#[derive(Debug, Default)]
pub struct MockRoutingProvider {
    routes: Mutex<HashMap<String, Option<f64>>>,
    calls: AtomicUsize,
}

impl MockRoutingProvider {
    /// Creates a provider that knows no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the directed pair to the given distance in kilometers.
    pub fn with_route(self, from: Coordinate, to: Coordinate, km: f64) -> Self {
        self.routes.lock().insert(key(from, to), Some(km));
        self
    }

    /// Scripts the directed pair to "no route found".
    pub fn with_no_route(self, from: Coordinate, to: Coordinate) -> Self {
        self.routes.lock().insert(key(from, to), None);
        self
    }

    /// Number of routing calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RoutingProvider for MockRoutingProvider {
    async fn route_km(&self, from: Coordinate, to: Coordinate) -> Result<Option<f64>, RefineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.routes.lock().get(&key(from, to)) {
            Some(outcome) => Ok(*outcome),
            None => Err(RefineError::RequestFailed {
                message: "scripted failure".to_string(),
            }),
        }
    }
}
