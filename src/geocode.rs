//! Nominatim HTTP adapter for address search.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::traits::{Coord, Geocoder};

#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying user agent.
    pub user_agent: String,
    pub timeout_secs: u64,
    pub limit: u32,
    /// Honor `HTTP_PROXY`-style environment variables.
    pub use_system_proxy: bool,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
            limit: 1,
            use_system_proxy: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: GeocodeConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: GeocodeConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimClient {
    fn locate(&self, query: &str) -> Result<Option<Coord>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let limit = self.config.limit.to_string();

        let places = self
            .client
            .get(url)
            .query(&[("format", "json"), ("q", query), ("limit", limit.as_str())])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<NominatimPlace>>())?;

        let Some(place) = places.into_iter().next() else {
            tracing::info!(query, "geocoder returned no match");
            return Ok(None);
        };

        let coord = place.coord().inspect_err(|err| {
            tracing::warn!(query, %err, "geocoder returned an unparseable coordinate");
        })?;
        tracing::info!(query, lat = coord.lat, lon = coord.lon, "geocoded");
        Ok(Some(coord))
    }
}

/// One entry of a Nominatim `/search?format=json` response. Coordinates
/// arrive as decimal strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimPlace {
    fn coord(&self) -> Result<Coord> {
        let parse = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::InvalidCoordinate(value.to_string()))
        };
        Ok(Coord::new(parse(&self.lat)?, parse(&self.lon)?))
    }
}
