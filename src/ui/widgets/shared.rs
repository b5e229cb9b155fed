//! Formatting helpers shared by the dashboard widgets. Missing readings
//! consistently render the localized "not available" label instead of a
//! fake zero.

use ratatui::layout::Alignment;

use crate::app::search::SearchError;
use crate::app::session::LoginError;
use crate::i18n::{Language, Text, TextDirection, text};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[must_use]
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Rounded temperature without unit, or the not-available label.
#[must_use]
pub fn fmt_temp_value(lang: Language, temp: Option<f32>) -> String {
    match temp {
        Some(value) if !value.is_nan() => format!("{}", value.round() as i32),
        _ => text(lang, Text::NotAvailable).to_string(),
    }
}

/// Rounded temperature with the degree unit, or the not-available label.
#[must_use]
pub fn fmt_temp(lang: Language, temp: Option<f32>) -> String {
    match temp {
        Some(value) if !value.is_nan() => format!("{}°C", value.round() as i32),
        _ => text(lang, Text::NotAvailable).to_string(),
    }
}

#[must_use]
pub fn search_error_text(lang: Language, error: &SearchError) -> &'static str {
    match error {
        SearchError::EmptyQuery => text(lang, Text::ErrEmptySearch),
        SearchError::LocationNotFound => text(lang, Text::ErrLocationNotFound),
        SearchError::Fetch(_) => text(lang, Text::ErrLoadFailed),
    }
}

#[must_use]
pub fn login_error_text(lang: Language, error: LoginError) -> &'static str {
    match error {
        LoginError::NameRequired => text(lang, Text::ErrNameRequired),
        LoginError::NameTooShort => text(lang, Text::ErrNameTooShort),
    }
}

/// Text alignment following the active language direction; the Persian UI
/// is laid out right-to-left.
#[must_use]
pub fn direction_alignment(lang: Language) -> Alignment {
    match lang.direction() {
        TextDirection::Ltr => Alignment::Left,
        TextDirection::Rtl => Alignment::Right,
    }
}
