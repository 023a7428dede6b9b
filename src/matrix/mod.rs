//! The full cross-product distance matrix, ranked by great-circle distance.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::PairResult;

use std::cmp::Ordering;

use crate::constants::EARTH_RADIUS_KM;
use crate::geocode::{Coordinate, ResolvedRecord};

/// Rounds to 2 decimal places (distances are reported in hundredths of a km).
pub(crate) fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Great-circle distance between two coordinates via the haversine formula,
/// in kilometers, rounded to 2 decimals.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_2dp(EARTH_RADIUS_KM * c)
}

/// Builds every requester×provider pair and ranks it ascending by
/// great-circle distance.
///
/// Enumeration is outer loop over requesters, inner loop over providers; the
/// sort is stable, so ties keep that enumeration order. Pure and
/// deterministic; `|result| = |requesters| × |providers|` exactly.
pub fn build(requesters: &[ResolvedRecord], providers: &[ResolvedRecord]) -> Vec<PairResult> {
    let mut pairs = Vec::with_capacity(requesters.len() * providers.len());

    for requester in requesters {
        for provider in providers {
            pairs.push(PairResult {
                requester: requester.clone(),
                provider: provider.clone(),
                great_circle_km: haversine_km(requester.coordinate, provider.coordinate),
                route_km: None,
            });
        }
    }

    pairs.sort_by(|a, b| {
        a.great_circle_km
            .partial_cmp(&b.great_circle_km)
            .unwrap_or(Ordering::Equal)
    });

    pairs
}
