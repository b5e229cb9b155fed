use ratatui::style::Color;

use crate::app::settings::ThemeMode;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub danger: Color,
    pub warning: Color,
    pub chart_line: Color,
    pub popup_surface: Color,
    pub popup_border: Color,
    pub popup_text: Color,
    pub popup_muted_text: Color,
}

/// Airy blues for light mode, slate tones for dark.
#[must_use]
pub fn theme_for(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme {
            background: Color::Rgb(244, 248, 252),
            surface: Color::Rgb(255, 255, 255),
            border: Color::Rgb(200, 215, 230),
            text: Color::Rgb(43, 63, 87),
            muted_text: Color::Rgb(92, 112, 140),
            accent: Color::Rgb(28, 109, 208),
            danger: Color::Rgb(186, 38, 38),
            warning: Color::Rgb(176, 112, 16),
            chart_line: Color::Rgb(28, 109, 208),
            popup_surface: Color::Rgb(232, 243, 255),
            popup_border: Color::Rgb(111, 179, 255),
            popup_text: Color::Rgb(43, 63, 87),
            popup_muted_text: Color::Rgb(92, 112, 140),
        },
        ThemeMode::Dark => Theme {
            background: Color::Rgb(15, 23, 42),
            surface: Color::Rgb(30, 41, 59),
            border: Color::Rgb(51, 65, 85),
            text: Color::Rgb(226, 232, 240),
            muted_text: Color::Rgb(148, 163, 184),
            accent: Color::Rgb(111, 179, 255),
            danger: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(250, 204, 21),
            chart_line: Color::Rgb(111, 179, 255),
            popup_surface: Color::Rgb(30, 41, 59),
            popup_border: Color::Rgb(111, 179, 255),
            popup_text: Color::Rgb(226, 232, 240),
            popup_muted_text: Color::Rgb(148, 163, 184),
        },
    }
}
