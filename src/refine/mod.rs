//! Route-distance refinement of the top-ranked pairs.
//!
//! Two-phase ranking: the matrix orders everything by cheap great-circle
//! distance, then only the leading prefix pays for routing calls. External
//! cost stays bounded by `max_calls` regardless of dataset size.

pub mod cache;
pub mod error;
pub mod provider;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use cache::RouteCache;
pub use error::RefineError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockRoutingProvider;
pub use provider::{OsrmClient, RoutingProvider};

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cancel::{CancelToken, Cancelled};
use crate::geocode::Coordinate;
use crate::matrix::PairResult;
use crate::pacing::CallPacer;

/// Caching, rate-limited front end over a [`RoutingProvider`], plus the
/// prefix re-ranking step.
pub struct RouteRefiner<R: RoutingProvider> {
    provider: R,
    cache: Arc<RouteCache>,
    pacer: Arc<CallPacer>,
}

impl<R: RoutingProvider> RouteRefiner<R> {
    /// Creates a refiner over `provider`. The pacer is the same instance the
    /// geocoding client uses, so spacing holds across both services.
    pub fn new(provider: R, cache: Arc<RouteCache>, pacer: Arc<CallPacer>) -> Self {
        Self {
            provider,
            cache,
            pacer,
        }
    }

    /// Refines the first `min(max_calls, len)` pairs of an already
    /// great-circle-sorted list in place.
    ///
    /// Each prefix pair gets one routing lookup (cached per coordinate pair);
    /// a failed lookup leaves `route_km` unset. The prefix is then re-sorted
    /// ascending by route distance, missing routes last (stable, so they keep
    /// their great-circle order), and everything beyond the prefix is left
    /// untouched. Length and membership never change.
    pub async fn refine(
        &self,
        pairs: &mut [PairResult],
        max_calls: usize,
        cancel: &CancelToken,
    ) -> Result<(), Cancelled> {
        let prefix_len = max_calls.min(pairs.len());

        for pair in pairs.iter_mut().take(prefix_len) {
            cancel.check()?;
            pair.route_km = self
                .route(pair.requester.coordinate, pair.provider.coordinate)
                .await
                .map(crate::matrix::round_2dp);
        }

        let (prefix, _) = pairs.split_at_mut(prefix_len);
        prefix.sort_by(|a, b| match (a.route_km, b.route_km) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        Ok(())
    }

    async fn route(&self, from: Coordinate, to: Coordinate) -> Option<f64> {
        if let Some(cached) = self.cache.get(from, to) {
            debug!(?from, ?to, hit = cached.is_some(), "route cache hit");
            return cached;
        }

        self.pacer.pace().await;

        let outcome = match self.provider.route_km(from, to).await {
            Ok(result) => result,
            Err(e) => {
                warn!(?from, ?to, error = %e, "routing failed, leaving pair unrefined");
                None
            }
        };

        self.cache.insert(from, to, outcome);
        outcome
    }
}
