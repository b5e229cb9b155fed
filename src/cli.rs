use clap::Parser;

use crate::app::settings::ThemeMode;
use crate::i18n::Language;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skydash",
    version,
    about = "Bilingual terminal weather dashboard"
)]
pub struct Cli {
    /// City searched automatically once the dashboard opens
    pub city: Option<String>,

    /// Display language (overrides the stored preference)
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Theme mode (overrides the stored preference)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeMode>,

    /// Forecast length in days
    #[arg(long, default_value_t = 14, value_parser = clap::value_parser!(u8).range(1..=16))]
    pub forecast_days: u8,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Skip the login screen
    #[arg(long)]
    pub skip_login: bool,

    /// Geocoding endpoint override
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Forecast endpoint override
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Archive endpoint override
    #[arg(long)]
    pub archive_url: Option<String>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(city) = &self.city
            && city.trim().is_empty()
        {
            anyhow::bail!("city must not be blank");
        }
        Ok(())
    }
}
