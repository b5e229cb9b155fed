use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::events::{AppEvent, start_frame_task};
use crate::app::search::{SearchEndpoints, SearchError, spawn_search};
use crate::app::session::{LoginForm, spawn_login_delay};
use crate::app::settings::{RuntimeSettings, SettingsStore, effective_settings};
use crate::cli::Cli;
use crate::domain::weather::WeatherSnapshot;
use crate::i18n::Language;

/// Days of the forecast strip visible at once; ←/→ scroll the rest.
pub const FORECAST_WINDOW: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Login,
    Dashboard,
    Quit,
}

/// Rows of the settings popover, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEntry {
    Mode,
    Language,
    Logout,
}

impl SettingsEntry {
    const ORDER: [SettingsEntry; 3] = [
        SettingsEntry::Mode,
        SettingsEntry::Language,
        SettingsEntry::Logout,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|e| *e == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub settings: RuntimeSettings,
    pub store: SettingsStore,
    pub endpoints: SearchEndpoints,
    pub login: LoginForm,
    pub user_name: Option<String>,
    pub search_input: String,
    pub search_in_flight: bool,
    pub search_generation: u64,
    pub error: Option<SearchError>,
    pub snapshot: Option<WeatherSnapshot>,
    pub forecast_offset: usize,
    pub settings_open: bool,
    pub settings_selected: SettingsEntry,
    pub settings_save_error: Option<String>,
    pub frame_tick: u64,
    auto_search: bool,
}

impl AppState {
    pub fn new(cli: &Cli, store: SettingsStore) -> Self {
        let settings = effective_settings(&store, cli);

        Self {
            mode: AppMode::Login,
            running: true,
            settings,
            store,
            endpoints: SearchEndpoints::from_cli(cli),
            login: LoginForm::default(),
            user_name: None,
            search_input: cli.city.clone().unwrap_or_default(),
            search_in_flight: false,
            search_generation: 0,
            error: None,
            snapshot: None,
            forecast_offset: 0,
            settings_open: false,
            settings_selected: SettingsEntry::Mode,
            settings_save_error: None,
            frame_tick: 0,
            auto_search: cli.city.is_some(),
        }
    }

    #[must_use]
    pub fn lang(&self) -> Language {
        self.settings.language
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                start_frame_task(tx.clone(), cli.fps);
                if cli.skip_login {
                    self.enter_dashboard(tx);
                }
            }
            AppEvent::TickFrame => {
                self.frame_tick = self.frame_tick.saturating_add(1);
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::LoginCompleted => {
                if self.mode == AppMode::Login && self.login.submitting {
                    self.user_name = Some(self.login.name.trim().to_string());
                    self.login.submitting = false;
                    self.enter_dashboard(tx);
                }
            }
            AppEvent::SearchCompleted {
                generation,
                snapshot,
            } => {
                if self.is_current_search(generation) {
                    self.search_in_flight = false;
                    self.error = None;
                    self.snapshot = Some(*snapshot);
                    self.forecast_offset = 0;
                }
            }
            AppEvent::SearchFailed { generation, error } => {
                if self.is_current_search(generation) {
                    self.search_in_flight = false;
                    self.error = Some(error);
                }
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    /// Results from a superseded search are dropped: only the newest
    /// generation may touch the view state.
    fn is_current_search(&self, generation: u64) -> bool {
        self.mode == AppMode::Dashboard && generation == self.search_generation
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }

        match self.mode {
            AppMode::Login => self.handle_login_key(key.code, tx).await?,
            AppMode::Dashboard => {
                if self.settings_open {
                    self.handle_settings_key(key.code);
                } else {
                    self.handle_dashboard_key(key.code, tx).await?;
                }
            }
            AppMode::Quit => {}
        }

        Ok(())
    }

    async fn handle_login_key(
        &mut self,
        code: KeyCode,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        if self.login.submitting {
            return Ok(());
        }

        match code {
            KeyCode::Esc => tx.send(AppEvent::Quit).await?,
            KeyCode::Enter => match self.login.validate() {
                Ok(()) => {
                    self.login.error = None;
                    self.login.submitting = true;
                    spawn_login_delay(tx.clone());
                }
                Err(err) => self.login.error = Some(err),
            },
            KeyCode::Backspace => {
                self.login.name.pop();
            }
            KeyCode::Char(c) => {
                self.login.name.push(c);
                self.login.error = None;
            }
            _ => {}
        }

        Ok(())
    }

    async fn handle_dashboard_key(
        &mut self,
        code: KeyCode,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match code {
            KeyCode::Esc => {
                if self.error.is_some() {
                    self.error = None;
                } else {
                    tx.send(AppEvent::Quit).await?;
                }
            }
            KeyCode::Tab => {
                self.settings_open = true;
                self.settings_selected = SettingsEntry::Mode;
            }
            KeyCode::Enter => self.submit_search(tx),
            KeyCode::Left => {
                self.forecast_offset = self.forecast_offset.saturating_sub(1);
            }
            KeyCode::Right => {
                if let Some(snapshot) = &self.snapshot {
                    let max_offset = snapshot.daily.len().saturating_sub(FORECAST_WINDOW);
                    self.forecast_offset = (self.forecast_offset + 1).min(max_offset);
                }
            }
            KeyCode::Backspace => {
                if !self.search_in_flight {
                    self.search_input.pop();
                }
            }
            KeyCode::Char(c) => {
                if !self.search_in_flight {
                    self.search_input.push(c);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_settings_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Tab => {
                self.settings_open = false;
            }
            KeyCode::Up => self.settings_selected = self.settings_selected.prev(),
            KeyCode::Down => self.settings_selected = self.settings_selected.next(),
            KeyCode::Enter | KeyCode::Left | KeyCode::Right => match self.settings_selected {
                SettingsEntry::Mode => self.apply_theme_toggle(),
                SettingsEntry::Language => self.apply_language_toggle(),
                SettingsEntry::Logout => {
                    if code == KeyCode::Enter {
                        self.logout();
                    }
                }
            },
            _ => {}
        }
    }

    /// Starts a search for the current input. An empty query is rejected
    /// before any client is built, so no request is issued.
    pub fn submit_search(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let query = self.search_input.trim().to_string();
        if query.is_empty() {
            self.error = Some(SearchError::EmptyQuery);
            return;
        }

        self.error = None;
        self.search_generation += 1;
        self.search_in_flight = true;
        spawn_search(
            self.endpoints.clone(),
            query,
            self.settings.language,
            self.search_generation,
            tx.clone(),
        );
    }

    pub fn apply_theme_toggle(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        self.persist_settings();
    }

    pub fn apply_language_toggle(&mut self) {
        self.settings.language = self.settings.language.toggled();
        self.persist_settings();
    }

    fn persist_settings(&mut self) {
        self.settings_save_error = self
            .store
            .save(self.settings)
            .err()
            .map(|err| format!("{err:#}"));
    }

    fn enter_dashboard(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.mode = AppMode::Dashboard;
        if self.auto_search && !self.search_input.trim().is_empty() {
            self.auto_search = false;
            self.submit_search(tx);
        }
    }

    /// Back to the login screen; view state is cleared and any in-flight
    /// search is invalidated by bumping the generation.
    fn logout(&mut self) {
        self.settings_open = false;
        self.mode = AppMode::Login;
        self.login.reset();
        self.user_name = None;
        self.snapshot = None;
        self.search_input.clear();
        self.error = None;
        self.search_in_flight = false;
        self.search_generation += 1;
        self.auto_search = false;
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn test_state() -> AppState {
        let cli = Cli::parse_from(["skydash", "--skip-login"]);
        let mut state = AppState::new(&cli, SettingsStore::disabled());
        state.mode = AppMode::Dashboard;
        state
    }

    #[test]
    fn empty_search_is_rejected_without_spawning() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = test_state();
        state.search_input = "   ".to_string();

        state.submit_search(&tx);

        assert_eq!(state.error, Some(SearchError::EmptyQuery));
        assert!(!state.search_in_flight);
        assert_eq!(state.search_generation, 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn stale_search_failure_is_dropped() {
        let cli = Cli::parse_from(["skydash"]);
        let (tx, _rx) = mpsc::channel(8);
        let mut state = test_state();
        state.search_generation = 3;

        state
            .handle_event(
                AppEvent::SearchFailed {
                    generation: 2,
                    error: SearchError::LocationNotFound,
                },
                &tx,
                &cli,
            )
            .await
            .unwrap();

        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn settings_entry_cycle_wraps() {
        assert_eq!(SettingsEntry::Logout.next(), SettingsEntry::Mode);
        assert_eq!(SettingsEntry::Mode.prev(), SettingsEntry::Logout);
    }

    #[test]
    fn logout_invalidates_in_flight_search() {
        let mut state = test_state();
        state.search_generation = 5;
        state.search_in_flight = true;
        state.user_name = Some("sam".to_string());

        state.logout();

        assert_eq!(state.mode, AppMode::Login);
        assert!(!state.is_current_search(5));
        assert!(state.user_name.is_none());
        assert!(state.snapshot.is_none());
    }

    #[test]
    fn theme_toggle_flips_and_persists_in_memory() {
        let mut state = test_state();
        let before = state.settings.theme;
        state.apply_theme_toggle();
        assert_ne!(state.settings.theme, before);
        assert!(state.settings_save_error.is_none());
    }
}
