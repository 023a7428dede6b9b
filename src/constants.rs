//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary values (e.g. intervals as `Duration`) from these
//! primary constants to avoid drift between the config defaults and the docs.

use std::time::Duration;

/// Mean Earth radius in kilometers, used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Minimum spacing between consecutive real network calls, in milliseconds.
///
/// The public Nominatim endpoint requires at most one request per second;
/// the pacer enforces this process-wide, across geocoding and routing.
pub const DEFAULT_MIN_CALL_INTERVAL_MS: u64 = 1000;

/// Ceiling on routing calls per run during refinement.
pub const DEFAULT_MAX_ROUTE_CALLS: usize = 200;

/// Per-request timeout for external calls. A timeout is treated as "no result".
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default geocoding endpoint (Nominatim search API).
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Default routing endpoint (OSRM route API, driving profile).
pub const DEFAULT_ROUTER_URL: &str = "https://router.project-osrm.org/route/v1/driving";

/// User-Agent sent with every external request. The public Nominatim endpoint
/// rejects requests without one.
pub const USER_AGENT: &str = concat!("georank/", env!("CARGO_PKG_VERSION"));

/// Returns the default pacing interval as a [`Duration`].
pub fn default_min_call_interval() -> Duration {
    Duration::from_millis(DEFAULT_MIN_CALL_INTERVAL_MS)
}

/// Returns the default request timeout as a [`Duration`].
pub fn default_request_timeout() -> Duration {
    Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
}
