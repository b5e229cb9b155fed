use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::Location;
use crate::i18n::Language;

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

#[derive(Debug, Clone)]
pub enum GeocodeOutcome {
    Found(Location),
    NotFound,
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(8))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// Resolves a place name to its best match. The first result wins;
    /// an empty result list is reported as `NotFound`, not an error.
    pub async fn resolve(&self, query: &str, lang: Language) -> Result<GeocodeOutcome> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", query),
                ("count", "1"),
                ("language", lang.api_code()),
                ("format", "json"),
            ])
            .send()
            .await
            .context("geocoding request failed")?
            .error_for_status()
            .context("geocoding request returned non-success status")?;

        let payload: GeocodeResponse = response
            .json()
            .await
            .context("failed to decode geocoding response")?;

        let Some(first) = payload.results.unwrap_or_default().into_iter().next() else {
            return Ok(GeocodeOutcome::NotFound);
        };

        Ok(GeocodeOutcome::Found(Location {
            name: first.name,
            latitude: first.latitude,
            longitude: first.longitude,
            country: first.country,
            admin1: first.admin1,
        }))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
}
