use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::{ArchiveDay, Location, parse_date};

pub const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Client for the historical daily archive, consumed only by the monthly
/// chart.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: Client,
    base_url: String,
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(ARCHIVE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(
        &self,
        location: &Location,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ArchiveDay>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("daily", "temperature_2m_mean,weather_code".to_string()),
                ("timezone", "auto".to_string()),
                ("start_date", start_date.format("%Y-%m-%d").to_string()),
                ("end_date", end_date.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .await
            .context("archive request failed")?
            .error_for_status()
            .context("archive request returned non-success status")?;

        let payload: ArchiveResponse = response
            .json()
            .await
            .context("failed to parse archive payload")?;

        Ok(parse_archive(&payload.daily))
    }
}

fn parse_archive(daily: &ArchiveDailyBlock) -> Vec<ArchiveDay> {
    let mut out = Vec::new();
    for idx in 0..daily.time.len() {
        let Some(date) = parse_date(&daily.time[idx]) else {
            continue;
        };

        out.push(ArchiveDay {
            date,
            temperature_mean_c: daily.temperature_2m_mean.get(idx).copied().flatten(),
        });
    }
    out
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: ArchiveDailyBlock,
}

#[derive(Debug, Deserialize)]
struct ArchiveDailyBlock {
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_mean: Vec<Option<f32>>,
}
