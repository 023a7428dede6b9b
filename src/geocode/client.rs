use std::sync::Arc;

use tracing::{debug, warn};

use crate::pacing::CallPacer;

use super::cache::LookupCache;
use super::provider::GeocodeProvider;
use super::types::Coordinate;

/// Cache-checking, rate-limited front end over a [`GeocodeProvider`].
///
/// At most one real request is issued per distinct normalized query per run;
/// every real request is preceded by the shared pacer's minimum interval.
/// Cache hits return immediately with no delay and no side effect.
pub struct LookupClient<P: GeocodeProvider> {
    provider: P,
    cache: Arc<LookupCache>,
    pacer: Arc<CallPacer>,
}

impl<P: GeocodeProvider> LookupClient<P> {
    /// Creates a client over `provider`, sharing `cache` and `pacer` with the
    /// rest of the run.
    pub fn new(provider: P, cache: Arc<LookupCache>, pacer: Arc<CallPacer>) -> Self {
        Self {
            provider,
            cache,
            pacer,
        }
    }

    /// Resolves one query to a coordinate, or `None`.
    ///
    /// Blank queries return `None` without any side effect. Transport
    /// failures, non-success statuses and empty result sets are all cached as
    /// "no result", so a failing query is never re-sent within the run.
    pub async fn lookup(&self, query: &str) -> Option<Coordinate> {
        if query.trim().is_empty() {
            return None;
        }

        if let Some(cached) = self.cache.get(query) {
            debug!(query, hit = cached.is_some(), "lookup cache hit");
            return cached;
        }

        self.pacer.pace().await;

        let outcome = match self.provider.geocode(query).await {
            Ok(result) => {
                debug!(query, found = result.is_some(), "geocoded");
                result
            }
            Err(e) => {
                warn!(query, error = %e, "geocoding failed, treating as no result");
                None
            }
        };

        self.cache.insert(query, outcome);
        outcome
    }
}
