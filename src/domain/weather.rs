use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::monthly::MonthlyPoint;

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
}

impl Location {
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.admin1, &self.country) {
            (Some(admin), Some(country)) => format!("{}, {}, {}", self.name, admin, country),
            (None, Some(country)) => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CurrentConditions {
    pub time: NaiveDateTime,
    pub temperature_2m_c: Option<f32>,
    pub apparent_temperature_c: Option<f32>,
    pub weather_code: Option<u16>,
}

#[derive(Debug, Clone)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub temperature_mean_c: Option<f32>,
    pub temperature_min_c: Option<f32>,
    pub temperature_max_c: Option<f32>,
    pub weather_code: Option<u16>,
}

/// One daily reading from the historical archive, input to the monthly
/// aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveDay {
    pub date: NaiveDate,
    pub temperature_mean_c: Option<f32>,
}

/// Everything one successful search produces. Replaced wholesale; the UI
/// never sees a half-updated mix of old and new data.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
    pub daily: Vec<DailyEntry>,
    pub monthly: Vec<MonthlyPoint>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn today(&self) -> Option<&DailyEntry> {
        self.daily.first()
    }
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
