use serde::Deserialize;

use crate::config::Config;
use crate::constants::USER_AGENT;

use super::error::GeocodeError;
use super::types::Coordinate;

/// A geocoding backend: free-text query in, zero or one coordinate out.
///
/// Implementations must not retry or pace; pacing and caching belong to
/// [`LookupClient`](super::client::LookupClient).
pub trait GeocodeProvider: Send + Sync {
    /// Looks up `query`, returning the best match if the service found one.
    fn geocode(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Option<Coordinate>, GeocodeError>> + Send;
}

impl<P: GeocodeProvider> GeocodeProvider for &P {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        (**self).geocode(query).await
    }
}

/// One search hit. Nominatim serializes coordinates as JSON strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Geocoder backed by a Nominatim-compatible search endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
    country_code: Option<String>,
    viewbox: Option<String>,
}

impl NominatimClient {
    /// Creates a client from config (endpoint, timeout, region scoping).
    pub fn new(config: &Config) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GeocodeError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.geocoder_url.clone(),
            country_code: config.country_code.clone(),
            viewbox: config.viewbox.clone(),
        })
    }
}

impl GeocodeProvider for NominatimClient {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let mut params: Vec<(&str, &str)> =
            vec![("q", query), ("format", "json"), ("limit", "1")];
        if let Some(cc) = &self.country_code {
            params.push(("countrycodes", cc.as_str()));
        }
        if let Some(viewbox) = &self.viewbox {
            params.push(("viewbox", viewbox.as_str()));
            params.push(("bounded", "1"));
        }

        let response = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| GeocodeError::RequestFailed {
                query: query.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::BadStatus {
                query: query.to_string(),
                status: status.as_u16(),
            });
        }

        let places: Vec<NominatimPlace> =
            response
                .json()
                .await
                .map_err(|e| GeocodeError::MalformedPayload {
                    query: query.to_string(),
                    message: e.to_string(),
                })?;

        // Multiple hits: take the first, the service ranks by relevance.
        match places.into_iter().next() {
            Some(place) => {
                let lat = place.lat.parse::<f64>();
                let lon = place.lon.parse::<f64>();
                match (lat, lon) {
                    (Ok(lat), Ok(lon)) => Ok(Some(Coordinate::new(lat, lon))),
                    _ => Err(GeocodeError::MalformedPayload {
                        query: query.to_string(),
                        message: "coordinate fields did not parse as numbers".to_string(),
                    }),
                }
            }
            None => Ok(None),
        }
    }
}
