use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::{
    CurrentConditions, DailyEntry, Location, parse_date, parse_datetime,
};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
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

    /// Fetches the current snapshot plus `days` days of daily aggregates.
    pub async fn fetch(
        &self,
        location: &Location,
        days: u8,
    ) -> Result<(CurrentConditions, Vec<DailyEntry>)> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,apparent_temperature,weather_code".to_string(),
                ),
                (
                    "daily",
                    "temperature_2m_mean,temperature_2m_min,temperature_2m_max,weather_code"
                        .to_string(),
                ),
                ("timezone", "auto".to_string()),
                ("forecast_days", days.to_string()),
            ])
            .send()
            .await
            .context("forecast request failed")?
            .error_for_status()
            .context("forecast request returned non-success status")?;

        let payload: ForecastResponse = response
            .json()
            .await
            .context("failed to parse forecast payload")?;

        let current = CurrentConditions {
            time: parse_datetime(&payload.current.time)
                .context("forecast payload has an invalid current time")?,
            temperature_2m_c: payload.current.temperature_2m,
            apparent_temperature_c: payload.current.apparent_temperature,
            weather_code: payload.current.weather_code,
        };

        Ok((current, parse_daily(&payload.daily)))
    }
}

fn parse_daily(daily: &DailyBlock) -> Vec<DailyEntry> {
    let mut out = Vec::new();
    for idx in 0..daily.time.len() {
        let Some(date) = parse_date(&daily.time[idx]) else {
            continue;
        };

        out.push(DailyEntry {
            date,
            temperature_mean_c: daily.temperature_2m_mean.get(idx).copied().flatten(),
            temperature_min_c: daily.temperature_2m_min.get(idx).copied().flatten(),
            temperature_max_c: daily.temperature_2m_max.get(idx).copied().flatten(),
            weather_code: daily.weather_code.get(idx).copied().flatten(),
        });
    }
    out
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: String,
    temperature_2m: Option<f32>,
    apparent_temperature: Option<f32>,
    weather_code: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_mean: Vec<Option<f32>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f32>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f32>>,
    #[serde(default)]
    weather_code: Vec<Option<u16>>,
}
