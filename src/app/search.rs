//! One search = geocode, then forecast and archive fetched concurrently,
//! then monthly aggregation. Each search carries a generation number so a
//! newer search supersedes any still-running one: the state machine drops
//! results whose generation is no longer current.

use chrono::{Months, Utc};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::app::events::AppEvent;
use crate::cli::Cli;
use crate::data::archive::ArchiveClient;
use crate::data::forecast::ForecastClient;
use crate::data::geocode::{GeocodeClient, GeocodeOutcome};
use crate::domain::monthly::monthly_series;
use crate::domain::weather::WeatherSnapshot;
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("empty search query")]
    EmptyQuery,
    #[error("location not found")]
    LocationNotFound,
    #[error("weather fetch failed: {0}")]
    Fetch(String),
}

/// Endpoint configuration for one search pipeline. The URL overrides exist
/// for integration tests pointing at a mock server.
#[derive(Debug, Clone)]
pub struct SearchEndpoints {
    pub geocode_url: String,
    pub forecast_url: String,
    pub archive_url: String,
    pub forecast_days: u8,
}

impl SearchEndpoints {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            geocode_url: cli
                .geocode_url
                .clone()
                .unwrap_or_else(|| crate::data::geocode::GEOCODE_URL.to_string()),
            forecast_url: cli
                .forecast_url
                .clone()
                .unwrap_or_else(|| crate::data::forecast::FORECAST_URL.to_string()),
            archive_url: cli
                .archive_url
                .clone()
                .unwrap_or_else(|| crate::data::archive::ARCHIVE_URL.to_string()),
            forecast_days: cli.forecast_days,
        }
    }
}

pub fn spawn_search(
    endpoints: SearchEndpoints,
    query: String,
    lang: Language,
    generation: u64,
    tx: mpsc::Sender<AppEvent>,
) {
    tokio::spawn(async move {
        let event = match run_search(&endpoints, &query, lang).await {
            Ok(snapshot) => AppEvent::SearchCompleted {
                generation,
                snapshot: Box::new(snapshot),
            },
            Err(error) => AppEvent::SearchFailed { generation, error },
        };
        let _ = tx.send(event).await;
    });
}

async fn run_search(
    endpoints: &SearchEndpoints,
    query: &str,
    lang: Language,
) -> Result<WeatherSnapshot, SearchError> {
    let geocoder = GeocodeClient::with_base_url(&endpoints.geocode_url);
    let outcome = geocoder
        .resolve(query, lang)
        .await
        .map_err(|err| SearchError::Fetch(format!("{err:#}")))?;

    let location = match outcome {
        GeocodeOutcome::Found(location) => location,
        GeocodeOutcome::NotFound => return Err(SearchError::LocationNotFound),
    };

    let forecast = ForecastClient::with_base_url(&endpoints.forecast_url);
    let archive = ArchiveClient::with_base_url(&endpoints.archive_url);

    let end_date = Utc::now().date_naive();
    let start_date = end_date
        .checked_sub_months(Months::new(12))
        .unwrap_or(end_date);

    // Both fetches only depend on the coordinates; run them together and
    // fail the whole search if either side fails.
    let ((current, daily), archive_days) = tokio::try_join!(
        forecast.fetch(&location, endpoints.forecast_days),
        archive.fetch(&location, start_date, end_date),
    )
    .map_err(|err| SearchError::Fetch(format!("{err:#}")))?;

    let monthly = monthly_series(&archive_days, lang);

    Ok(WeatherSnapshot {
        location,
        current,
        daily,
        monthly,
        fetched_at: Utc::now(),
    })
}
