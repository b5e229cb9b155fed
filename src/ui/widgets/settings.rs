use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::settings::ThemeMode;
use crate::app::state::{AppState, SettingsEntry};
use crate::i18n::{Language, Text, text};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    frame.render_widget(Clear, area);

    let lang = state.lang();
    let panel_style = Style::default()
        .fg(theme.popup_text)
        .bg(theme.popup_surface);

    let block = Block::default()
        .title(text(lang, Text::SettingsTitle))
        .borders(Borders::ALL)
        .style(panel_style)
        .border_style(
            Style::default()
                .fg(theme.popup_border)
                .bg(theme.popup_surface),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Min(4),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    let items = entry_items(state);
    let mut list_state = ListState::default().with_selected(Some(state.settings_selected.index()));
    let list = List::new(items)
        .style(panel_style)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let hint = Paragraph::new(text(lang, Text::SettingsHint))
        .style(Style::default().fg(theme.popup_muted_text));
    frame.render_widget(hint, chunks[1]);

    if let Some(save_error) = &state.settings_save_error {
        let warning =
            Paragraph::new(save_error.clone()).style(Style::default().fg(theme.warning));
        frame.render_widget(warning, chunks[2]);
    }
}

fn entry_items(state: &AppState) -> Vec<ListItem<'static>> {
    let lang = state.lang();

    let mode_value = match state.settings.theme {
        ThemeMode::Light => text(lang, Text::SettingsLight),
        ThemeMode::Dark => text(lang, Text::SettingsDark),
    };
    let language_value = match state.settings.language {
        Language::En => "English",
        Language::Fa => "فارسی",
    };

    [
        (SettingsEntry::Mode, text(lang, Text::SettingsMode), mode_value),
        (
            SettingsEntry::Language,
            text(lang, Text::SettingsLanguage),
            language_value,
        ),
        (
            SettingsEntry::Logout,
            text(lang, Text::SettingsLogout),
            "",
        ),
    ]
    .into_iter()
    .map(|(_, label, value)| {
        let row = if value.is_empty() {
            label.to_string()
        } else {
            format!("{label:<12} [{value}]")
        };
        ListItem::new(Line::from(row))
    })
    .collect()
}
