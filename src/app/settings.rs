//! Persisted user settings: theme mode and language. Loaded once at
//! startup, written synchronously by the setters in the settings popover.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSettings {
    pub theme: ThemeMode,
    pub language: Language,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            language: Language::En,
        }
    }
}

/// Storage for [`RuntimeSettings`], injected into the app state at startup
/// so tests can point it at a temp file (or disable it entirely).
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// Resolves the settings path from the environment:
    /// `$SKYDASH_CONFIG_DIR/settings.json` when set, otherwise
    /// `~/.config/skydash/settings.json`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            path: settings_path(),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A store that never reads or writes; settings live only in memory.
    #[must_use]
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Reads stored settings; absent or invalid content falls back to the
    /// defaults (light theme, English).
    #[must_use]
    pub fn load(&self) -> RuntimeSettings {
        let Some(path) = &self.path else {
            return RuntimeSettings::default();
        };

        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, settings: RuntimeSettings) -> anyhow::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        write_settings(path, settings)
    }
}

fn write_settings(path: &Path, settings: RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(&settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("SKYDASH_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("skydash")
            .join("settings.json"),
    )
}

/// Stored settings with CLI flags layered on top; an explicit flag beats
/// the stored value for this run.
#[must_use]
pub fn effective_settings(store: &SettingsStore, cli: &Cli) -> RuntimeSettings {
    let mut settings = store.load();
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if let Some(language) = cli.language {
        settings.language = language;
    }
    settings
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn load_defaults_when_file_absent() {
        let dir = tempdir().expect("tempdir");
        let store = SettingsStore::at(dir.path().join("settings.json"));
        assert_eq!(store.load(), RuntimeSettings::default());
    }

    #[test]
    fn load_defaults_on_invalid_content() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").expect("write");
        let store = SettingsStore::at(path);
        assert_eq!(store.load(), RuntimeSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().expect("tempdir");
        let store = SettingsStore::at(dir.path().join("nested").join("settings.json"));
        let settings = RuntimeSettings {
            theme: ThemeMode::Dark,
            language: Language::Fa,
        };
        store.save(settings).expect("save");
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn disabled_store_is_inert() {
        let store = SettingsStore::disabled();
        assert_eq!(store.load(), RuntimeSettings::default());
        assert!(store.save(RuntimeSettings::default()).is_ok());
    }

    #[test]
    fn cli_flags_override_stored_values() {
        let dir = tempdir().expect("tempdir");
        let store = SettingsStore::at(dir.path().join("settings.json"));
        store
            .save(RuntimeSettings {
                theme: ThemeMode::Dark,
                language: Language::Fa,
            })
            .expect("save");

        let cli = Cli::parse_from(["skydash", "--theme", "light"]);
        let settings = effective_settings(&store, &cli);
        assert_eq!(settings.theme, ThemeMode::Light);
        // Untouched flag keeps the stored value.
        assert_eq!(settings.language, Language::Fa);
    }
}
