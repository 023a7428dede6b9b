//! Georank library crate (used by the CLI binary and integration tests).
//!
//! Matches two tabular datasets of addresses by geographic proximity: every
//! address is geocoded through a cached, rate-limited lookup client, every
//! requester/provider pair is scored by great-circle distance, and the ranked
//! prefix can optionally be refined with route distances.
//!
//! # Public API Surface
//!
//! ## Data model
//! - [`Dataset`], [`SourceRecord`], [`DatasetRole`] - parsed tabular input
//! - [`Coordinate`], [`ResolvedRecord`], [`ErrorEntry`] - resolution output
//! - [`PairResult`], [`MatchOutcome`] - ranked results
//!
//! ## Address resolution
//! - [`CandidateBuilder`] - ordered candidate queries for one address
//! - [`LookupClient`], [`LookupCache`], [`CallPacer`] - cached, paced lookups
//! - [`AddressResolver`], [`resolve_dataset`] - per-record / per-dataset
//! - [`NominatimClient`] - the real geocoding backend
//!
//! ## Ranking
//! - [`matrix::build`], [`matrix::haversine_km`] - the cross-product matrix
//! - [`RouteRefiner`], [`OsrmClient`] - bounded route-distance refinement
//!
//! ## Orchestration
//! - [`Pipeline`] - sequences a full run
//! - [`ProgressSink`], [`Phase`], [`CancelToken`] - observability and control
//!
//! ## Test/Mock Support
//! Mock backends are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cancel;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod geocode;
pub mod matrix;
pub mod pacing;
pub mod pipeline;
pub mod progress;
pub mod refine;

pub use cancel::{CancelToken, Cancelled};
pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_MAX_ROUTE_CALLS, DEFAULT_MIN_CALL_INTERVAL_MS, EARTH_RADIUS_KM, USER_AGENT,
};
pub use dataset::{Dataset, DatasetError, DatasetRole, SourceRecord, parse_csv, write_csv};
pub use geocode::{
    AddressResolver, CandidateBuilder, Coordinate, ErrorEntry, GeocodeError, GeocodeProvider,
    LookupCache, LookupClient, NominatimClient, Resolution, ResolvedDataset, ResolvedRecord,
    extract_postal_code, normalize_query, resolve_dataset, standardize_address,
};
#[cfg(any(test, feature = "mock"))]
pub use geocode::MockGeocodeProvider;
pub use matrix::{PairResult, build as build_matrix, haversine_km};
pub use pacing::CallPacer;
pub use pipeline::{MatchOutcome, Pipeline, PipelineError};
pub use progress::{NullProgress, Phase, ProgressSink};
#[cfg(any(test, feature = "mock"))]
pub use refine::MockRoutingProvider;
pub use refine::{OsrmClient, RefineError, RouteCache, RouteRefiner, RoutingProvider};
