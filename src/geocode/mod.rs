//! Address resolution: candidate queries, the cached rate-limited lookup
//! client, and per-record / per-dataset resolvers.

pub mod cache;
pub mod candidates;
pub mod client;
pub mod error;
pub mod provider;
pub mod resolver;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use cache::{LookupCache, normalize_query};
pub use candidates::{CandidateBuilder, extract_postal_code, standardize_address};
pub use client::LookupClient;
pub use error::GeocodeError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockGeocodeProvider;
pub use provider::{GeocodeProvider, NominatimClient};
pub use resolver::{AddressResolver, ResolvedDataset, resolve_dataset};
pub use types::{Coordinate, ErrorEntry, Resolution, ResolvedRecord};
