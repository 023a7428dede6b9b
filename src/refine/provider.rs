use serde::Deserialize;

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::geocode::Coordinate;

use super::error::RefineError;

/// A routing backend: two coordinates in, a travel distance out.
///
/// Distances are returned in kilometers, unrounded; `Ok(None)` means the
/// service found no route between the points.
pub trait RoutingProvider: Send + Sync {
    /// Computes the travel distance from `from` to `to`.
    fn route_km(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> impl std::future::Future<Output = Result<Option<f64>, RefineError>> + Send;
}

impl<R: RoutingProvider> RoutingProvider for &R {
    async fn route_km(&self, from: Coordinate, to: Coordinate) -> Result<Option<f64>, RefineError> {
        (**self).route_km(from, to).await
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Route length in meters.
    distance: f64,
}

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

/// Router backed by an OSRM-compatible route endpoint.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    /// Creates a client from config (endpoint, timeout).
    pub fn new(config: &Config) -> Result<Self, RefineError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RefineError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.router_url.trim_end_matches('/').to_string(),
        })
    }
}

impl RoutingProvider for OsrmClient {
    async fn route_km(&self, from: Coordinate, to: Coordinate) -> Result<Option<f64>, RefineError> {
        // OSRM takes lon,lat pairs in the path.
        let url = format!(
            "{}/{},{};{},{}",
            self.base_url, from.lon, from.lat, to.lon, to.lat
        );

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "false")])
            .send()
            .await
            .map_err(|e| RefineError::RequestFailed {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RefineError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: OsrmResponse =
            response
                .json()
                .await
                .map_err(|e| RefineError::MalformedPayload {
                    message: e.to_string(),
                })?;

        if body.code != "Ok" {
            return Ok(None);
        }

        Ok(body.routes.first().map(|r| r.distance / 1000.0))
    }
}
