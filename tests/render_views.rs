mod common;

use clap::Parser;
use common::{dashboard_state, fixture_snapshot, missing_readings_snapshot, render_to_string};
use skydash::{
    app::{
        search::SearchError,
        settings::SettingsStore,
        state::AppState,
    },
    cli::Cli,
    i18n::Language,
};

#[test]
fn dashboard_shows_location_and_temperatures() {
    let cli = Cli::parse_from(["skydash"]);
    let state = dashboard_state(&cli, fixture_snapshot());

    let rendered = render_to_string(100, 32, &state);
    assert!(rendered.contains("Shiraz, Fars, Iran"));
    assert!(rendered.contains("8°C"));
    assert!(rendered.contains("Weather Dashboard"));
    assert!(rendered.contains("14-Day Forecast"));
    assert!(rendered.contains("Monthly Average Temperature"));
}

#[test]
fn missing_readings_render_as_not_available() {
    let cli = Cli::parse_from(["skydash"]);
    let state = dashboard_state(&cli, missing_readings_snapshot());

    let rendered = render_to_string(100, 32, &state);
    assert!(rendered.contains("N/A"));
    assert!(!rendered.contains("0°C"));
}

#[test]
fn persian_dashboard_uses_persian_labels() {
    let cli = Cli::parse_from(["skydash", "--language", "fa"]);
    let state = dashboard_state(&cli, fixture_snapshot());

    let rendered = render_to_string(100, 32, &state);
    assert!(rendered.contains("داشبورد"));
    assert!(rendered.contains("روزه"));
}

#[test]
fn persian_header_is_right_aligned() {
    let cli_en = Cli::parse_from(["skydash"]);
    let cli_fa = Cli::parse_from(["skydash", "--language", "fa"]);
    let en = render_to_string(100, 32, &dashboard_state(&cli_en, fixture_snapshot()));
    let fa = render_to_string(100, 32, &dashboard_state(&cli_fa, fixture_snapshot()));

    let en_title_col = en
        .lines()
        .find_map(|line| line.find("Weather Dashboard"))
        .expect("english title");
    let fa_title_col = fa
        .lines()
        .find_map(|line| line.find("داشبورد"))
        .expect("persian title");
    // The RTL layout moves the title into the right half of the header.
    assert!(fa_title_col > en_title_col);
}

#[test]
fn login_screen_renders_prompt_and_hint() {
    let cli = Cli::parse_from(["skydash"]);
    let state = AppState::new(&cli, SettingsStore::disabled());

    let rendered = render_to_string(80, 24, &state);
    assert!(rendered.contains("Login"));
    assert!(rendered.contains("Enter your name"));
    assert!(rendered.contains("Enter to log in"));
}

#[test]
fn login_validation_error_is_visible() {
    let cli = Cli::parse_from(["skydash"]);
    let mut state = AppState::new(&cli, SettingsStore::disabled());
    state.login.name = "a".to_string();
    state.login.error = state.login.validate().err();

    let rendered = render_to_string(80, 24, &state);
    assert!(rendered.contains("Name must be at least 2 characters"));
}

#[test]
fn search_error_line_appears_with_dismiss_hint() {
    let cli = Cli::parse_from(["skydash"]);
    let mut state = dashboard_state(&cli, fixture_snapshot());
    state.error = Some(SearchError::LocationNotFound);

    let rendered = render_to_string(100, 32, &state);
    assert!(rendered.contains("Location not found"));
    assert!(rendered.contains("Esc to dismiss"));
}

#[test]
fn settings_popover_lists_all_entries() {
    let cli = Cli::parse_from(["skydash"]);
    let mut state = dashboard_state(&cli, fixture_snapshot());
    state.settings_open = true;

    let rendered = render_to_string(100, 32, &state);
    assert!(rendered.contains("Settings"));
    assert!(rendered.contains("Mode"));
    assert!(rendered.contains("Light"));
    assert!(rendered.contains("Language"));
    assert!(rendered.contains("Log out"));
}

#[test]
fn empty_dashboard_shows_search_placeholder() {
    let cli = Cli::parse_from(["skydash"]);
    let mut state = dashboard_state(&cli, fixture_snapshot());
    state.snapshot = None;

    let rendered = render_to_string(100, 32, &state);
    assert!(rendered.contains("City name..."));
}

#[test]
fn tiny_terminal_shows_the_resize_warning() {
    let cli = Cli::parse_from(["skydash"]);
    let state = dashboard_state(&cli, fixture_snapshot());

    let rendered = render_to_string(38, 12, &state);
    assert!(rendered.contains("Terminal too small"));
}

#[test]
fn loading_spinner_replaces_the_search_input() {
    let cli = Cli::parse_from(["skydash"]);
    let mut state = dashboard_state(&cli, fixture_snapshot());
    state.search_input = "Tabriz".to_string();
    state.search_in_flight = true;

    let rendered = render_to_string(100, 32, &state);
    assert!(rendered.contains("Loading..."));
    assert!(!rendered.contains("Tabriz"));
}

#[test]
fn language_value_is_shown_in_the_popover() {
    let cli = Cli::parse_from(["skydash", "--language", "fa"]);
    let mut state = dashboard_state(&cli, fixture_snapshot());
    assert_eq!(state.lang(), Language::Fa);
    state.settings_open = true;

    let rendered = render_to_string(100, 32, &state);
    assert!(rendered.contains("فارسی"));
}
