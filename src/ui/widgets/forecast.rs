use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, FORECAST_WINDOW};
use crate::domain::conditions::weather_icon;
use crate::domain::weather::DailyEntry;
use crate::i18n::{Language, Text, month_short, text, weather_description, weekday_short};
use crate::ui::theme::Theme;
use crate::ui::widgets::shared::{direction_alignment, fmt_temp_value};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let lang = state.lang();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(text(lang, Text::ForecastTitle))
        .style(Style::default().bg(theme.surface).fg(theme.text))
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = &state.snapshot else {
        return;
    };
    if snapshot.daily.is_empty() || inner.width == 0 {
        return;
    }

    let visible: Vec<&DailyEntry> = snapshot
        .daily
        .iter()
        .skip(state.forecast_offset)
        .take(FORECAST_WINDOW)
        .collect();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, visible.len() as u32); visible.len()])
        .split(inner);

    for (entry, column) in visible.iter().zip(columns.iter()) {
        render_day(frame, *column, entry, lang, theme);
    }
}

fn render_day(frame: &mut Frame, area: Rect, entry: &DailyEntry, lang: Language, theme: Theme) {
    let description = weather_description(lang, entry.weather_code);
    let icon = weather_icon(entry.weather_code, description);

    let lines = vec![
        Line::from(Span::styled(
            weekday_short(lang, entry.date.weekday()).to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{:02} {}", entry.date.day(), month_short(lang, entry.date.month())),
            Style::default().fg(theme.muted_text),
        )),
        Line::from(Span::styled(icon, Style::default().fg(theme.accent))),
        Line::from(Span::styled(
            fmt_temp_value(lang, entry.temperature_max_c),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            fmt_temp_value(lang, entry.temperature_min_c),
            Style::default().fg(theme.muted_text),
        )),
        Line::from(Span::styled(
            fmt_temp_value(lang, entry.temperature_mean_c),
            Style::default().fg(theme.muted_text),
        )),
    ];

    let alignment = if area.width < 12 {
        Alignment::Center
    } else {
        direction_alignment(lang)
    };
    frame.render_widget(Paragraph::new(lines).alignment(alignment), area);
}
