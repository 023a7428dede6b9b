//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `GEORANK_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::time::Duration;

use crate::constants::{
    DEFAULT_GEOCODER_URL, DEFAULT_MAX_ROUTE_CALLS, DEFAULT_MIN_CALL_INTERVAL_MS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_ROUTER_URL,
};

/// Pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `GEORANK_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Geocoding endpoint (Nominatim search API).
    pub geocoder_url: String,

    /// Routing endpoint (OSRM route API). Only used when refinement is requested.
    pub router_url: String,

    /// Minimum spacing between consecutive real network calls.
    pub min_call_interval: Duration,

    /// Ceiling on routing calls during refinement. Default: `200`.
    pub max_route_calls: usize,

    /// Per-request timeout for external calls.
    pub request_timeout: Duration,

    /// ISO country code passed to the geocoder (e.g. `it`), if any.
    pub country_code: Option<String>,

    /// Bounding viewbox hint for the geocoder (`lon1,lat1,lon2,lat2`), if any.
    pub viewbox: Option<String>,

    /// Textual region qualifier appended to postal-code queries
    /// (e.g. `Veneto, Italia`), if any.
    pub region_hint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            router_url: DEFAULT_ROUTER_URL.to_string(),
            min_call_interval: Duration::from_millis(DEFAULT_MIN_CALL_INTERVAL_MS),
            max_route_calls: DEFAULT_MAX_ROUTE_CALLS,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            country_code: None,
            viewbox: None,
            region_hint: None,
        }
    }
}

impl Config {
    const ENV_GEOCODER_URL: &'static str = "GEORANK_GEOCODER_URL";
    const ENV_ROUTER_URL: &'static str = "GEORANK_ROUTER_URL";
    const ENV_MIN_CALL_INTERVAL_MS: &'static str = "GEORANK_MIN_CALL_INTERVAL_MS";
    const ENV_MAX_ROUTE_CALLS: &'static str = "GEORANK_MAX_ROUTE_CALLS";
    const ENV_REQUEST_TIMEOUT_SECS: &'static str = "GEORANK_REQUEST_TIMEOUT_SECS";
    const ENV_COUNTRY_CODE: &'static str = "GEORANK_COUNTRY_CODE";
    const ENV_VIEWBOX: &'static str = "GEORANK_VIEWBOX";
    const ENV_REGION_HINT: &'static str = "GEORANK_REGION_HINT";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let geocoder_url =
            Self::parse_string_from_env(Self::ENV_GEOCODER_URL, defaults.geocoder_url);
        let router_url = Self::parse_string_from_env(Self::ENV_ROUTER_URL, defaults.router_url);
        let min_call_interval = Duration::from_millis(Self::parse_u64_from_env(
            Self::ENV_MIN_CALL_INTERVAL_MS,
            DEFAULT_MIN_CALL_INTERVAL_MS,
        )?);
        let max_route_calls = Self::parse_u64_from_env(
            Self::ENV_MAX_ROUTE_CALLS,
            DEFAULT_MAX_ROUTE_CALLS as u64,
        )? as usize;
        let request_timeout = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_REQUEST_TIMEOUT_SECS,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);
        let country_code = Self::parse_optional_string_from_env(Self::ENV_COUNTRY_CODE);
        let viewbox = Self::parse_optional_string_from_env(Self::ENV_VIEWBOX);
        let region_hint = Self::parse_optional_string_from_env(Self::ENV_REGION_HINT);

        Ok(Self {
            geocoder_url,
            router_url,
            min_call_interval,
            max_route_calls,
            request_timeout,
            country_code,
            viewbox,
            region_hint,
        })
    }

    /// Validates basic invariants (non-blank endpoints, nonzero pacing).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.geocoder_url.trim().is_empty() {
            return Err(ConfigError::BlankUrl {
                var: Self::ENV_GEOCODER_URL,
            });
        }
        if self.router_url.trim().is_empty() {
            return Err(ConfigError::BlankUrl {
                var: Self::ENV_ROUTER_URL,
            });
        }
        if self.min_call_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    fn parse_string_from_env(var_name: &'static str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &'static str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::InvalidNumber {
                var: var_name,
                value: value.clone(),
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }
}
