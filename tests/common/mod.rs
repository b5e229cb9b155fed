#![allow(dead_code)]

use chrono::{Duration, NaiveDate, Utc};
use clap::Parser;
use ratatui::{Terminal, backend::TestBackend};
use skydash::{
    app::{
        settings::SettingsStore,
        state::{AppMode, AppState},
    },
    cli::Cli,
    domain::{
        monthly::monthly_series,
        weather::{ArchiveDay, CurrentConditions, DailyEntry, Location, WeatherSnapshot,
            parse_datetime},
    },
    i18n::Language,
    ui,
};

pub fn shiraz_cli() -> Cli {
    Cli::parse_from(["skydash", "Shiraz", "--skip-login"])
}

pub fn shiraz_location() -> Location {
    Location {
        name: "Shiraz".to_string(),
        latitude: 29.5918,
        longitude: 52.5837,
        country: Some("Iran".to_string()),
        admin1: Some("Fars".to_string()),
    }
}

pub fn fixture_snapshot() -> WeatherSnapshot {
    let base_date = NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid fixed date");

    let daily = (0..14)
        .map(|offset| DailyEntry {
            date: base_date + Duration::days(offset),
            temperature_mean_c: Some(8.0 + offset as f32),
            temperature_min_c: Some(3.0 + offset as f32),
            temperature_max_c: Some(12.0 + offset as f32),
            weather_code: Some(3),
        })
        .collect();

    let archive: Vec<ArchiveDay> = (0..120)
        .map(|offset| ArchiveDay {
            date: NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid fixed date")
                + Duration::days(offset),
            temperature_mean_c: Some(20.0 - offset as f32 * 0.1),
        })
        .collect();

    WeatherSnapshot {
        location: shiraz_location(),
        current: CurrentConditions {
            time: parse_datetime("2026-02-12T10:00").expect("valid fixed time"),
            temperature_2m_c: Some(8.4),
            apparent_temperature_c: Some(6.9),
            weather_code: Some(3),
        },
        daily,
        monthly: monthly_series(&archive, Language::En),
        fetched_at: Utc::now(),
    }
}

/// A snapshot whose readings all came back null.
pub fn missing_readings_snapshot() -> WeatherSnapshot {
    let mut snapshot = fixture_snapshot();
    snapshot.current.temperature_2m_c = None;
    snapshot.current.apparent_temperature_c = None;
    snapshot.current.weather_code = None;
    for entry in &mut snapshot.daily {
        entry.temperature_mean_c = None;
        entry.temperature_min_c = None;
        entry.temperature_max_c = None;
        entry.weather_code = None;
    }
    snapshot.monthly.clear();
    snapshot
}

pub fn dashboard_state(cli: &Cli, snapshot: WeatherSnapshot) -> AppState {
    let mut state = AppState::new(cli, SettingsStore::disabled());
    state.mode = AppMode::Dashboard;
    state.user_name = Some("Sam".to_string());
    state.snapshot = Some(snapshot);
    state
}

pub fn render_to_string(width: u16, height: u16, state: &AppState) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| ui::render(frame, state)).expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}
