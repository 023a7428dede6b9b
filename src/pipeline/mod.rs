//! Orchestration of a full matching run.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::PipelineError;
pub use types::MatchOutcome;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::cancel::CancelToken;
use crate::config::Config;
use crate::dataset::{Dataset, DatasetRole};
use crate::geocode::{
    AddressResolver, CandidateBuilder, GeocodeProvider, LookupCache, LookupClient, resolve_dataset,
};
use crate::matrix;
use crate::pacing::CallPacer;
use crate::progress::{Phase, ProgressSink};
use crate::refine::{RouteCache, RouteRefiner, RoutingProvider};

/// Sequences a run: resolve requesters, resolve providers, build the ranked
/// matrix, optionally refine the prefix with route distances.
///
/// Caches and the pacer are created fresh for each run and shared by
/// reference within it. A pipeline is not designed for concurrent
/// overlapping runs.
pub struct Pipeline<G: GeocodeProvider, R: RoutingProvider> {
    geocoder: G,
    router: R,
    min_call_interval: Duration,
    max_route_calls: usize,
    region_hint: Option<String>,
}

impl<G: GeocodeProvider, R: RoutingProvider> Pipeline<G, R> {
    /// Creates a pipeline over the given backends, taking pacing and
    /// refinement settings from `config`.
    pub fn new(geocoder: G, router: R, config: &Config) -> Self {
        Self {
            geocoder,
            router,
            min_call_interval: config.min_call_interval,
            max_route_calls: config.max_route_calls,
            region_hint: config.region_hint.clone(),
        }
    }

    /// Runs the whole pipeline.
    ///
    /// Address columns are zero-based indices into each dataset. The run
    /// always completes with both a ranked list and the error lists unless a
    /// structural failure (bad column) or cancellation stops it.
    #[allow(clippy::too_many_arguments)]
    pub async fn run(
        &self,
        requesters: &Dataset,
        requester_column: usize,
        providers: &Dataset,
        provider_column: usize,
        refine: bool,
        progress: &mut dyn ProgressSink,
        cancel: &CancelToken,
    ) -> Result<MatchOutcome, PipelineError> {
        Self::check_column(requesters, requester_column, DatasetRole::Requester)?;
        Self::check_column(providers, provider_column, DatasetRole::Provider)?;

        // One pacer and one lookup cache for the whole run, shared across
        // both dataset resolutions and (for the pacer) the routing client.
        let pacer = Arc::new(CallPacer::new(self.min_call_interval));
        let lookup_cache = Arc::new(LookupCache::new());
        let client = LookupClient::new(&self.geocoder, lookup_cache.clone(), pacer.clone());
        let resolver =
            AddressResolver::new(&client, CandidateBuilder::new(self.region_hint.clone()));

        progress.phase(Phase::ResolvingRequesters);
        let resolved_requesters = resolve_dataset(
            &resolver,
            requesters,
            requester_column,
            DatasetRole::Requester,
            progress,
            cancel,
        )
        .await?;

        progress.phase(Phase::ResolvingProviders);
        let resolved_providers = resolve_dataset(
            &resolver,
            providers,
            provider_column,
            DatasetRole::Provider,
            progress,
            cancel,
        )
        .await?;

        progress.phase(Phase::ComputingDistances);
        let mut pairs = matrix::build(&resolved_requesters.resolved, &resolved_providers.resolved);

        if refine {
            progress.phase(Phase::RefiningRoutes);
            let refiner =
                RouteRefiner::new(&self.router, Arc::new(RouteCache::new()), pacer.clone());
            refiner
                .refine(&mut pairs, self.max_route_calls, cancel)
                .await?;
        }

        info!(
            pairs = pairs.len(),
            requester_errors = resolved_requesters.errors.len(),
            provider_errors = resolved_providers.errors.len(),
            distinct_queries = lookup_cache.len(),
            "run complete"
        );

        Ok(MatchOutcome {
            pairs,
            requester_errors: resolved_requesters.errors,
            provider_errors: resolved_providers.errors,
        })
    }

    fn check_column(
        dataset: &Dataset,
        index: usize,
        role: DatasetRole,
    ) -> Result<(), PipelineError> {
        let width = dataset.headers().len();
        if index >= width {
            return Err(PipelineError::InvalidColumn { role, index, width });
        }
        Ok(())
    }
}
