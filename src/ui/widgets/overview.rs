use chrono::{Datelike, Timelike};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use crate::domain::conditions::weather_icon;
use crate::domain::weather::WeatherSnapshot;
use crate::i18n::{Text, month_short, text, weather_description, weekday_name};
use crate::ui::theme::Theme;
use crate::ui::widgets::shared::{direction_alignment, fmt_temp, fmt_temp_value};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let lang = state.lang();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(text(lang, Text::OverviewTitle))
        .style(Style::default().bg(theme.surface).fg(theme.text))
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = &state.snapshot else {
        let placeholder = Paragraph::new(text(lang, Text::SearchPlaceholder))
            .style(Style::default().fg(theme.muted_text))
            .alignment(direction_alignment(lang));
        frame.render_widget(placeholder, inner);
        return;
    };

    let paragraph = Paragraph::new(overview_lines(snapshot, state, theme))
        .alignment(direction_alignment(lang));
    frame.render_widget(paragraph, inner);
}

fn overview_lines(snapshot: &WeatherSnapshot, state: &AppState, theme: Theme) -> Vec<Line<'static>> {
    let lang = state.lang();
    let current = &snapshot.current;
    let time = current.time;

    let description = weather_description(lang, current.weather_code);
    let icon = weather_icon(current.weather_code, description);

    let mut lines = vec![
        Line::from(Span::styled(
            snapshot.location.display_name(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{}, {:02} {} {}",
                weekday_name(lang, time.weekday()),
                time.day(),
                month_short(lang, time.month()),
                time.year()
            ),
            Style::default().fg(theme.muted_text),
        )),
        Line::from(Span::styled(
            format!("{:02}:{:02}", time.hour(), time.minute()),
            Style::default().fg(theme.muted_text),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(theme.accent)),
            Span::styled(description, Style::default().fg(theme.text)),
        ]),
        Line::from(Span::styled(
            fmt_temp(lang, current.temperature_2m_c),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{}: {}",
                text(lang, Text::FeelsLike),
                fmt_temp_value(lang, current.apparent_temperature_c)
            ),
            Style::default().fg(theme.muted_text),
        )),
    ];

    if let Some(today) = snapshot.today() {
        lines.push(Line::from(Span::styled(
            format!(
                "{}: {}  {}: {}",
                text(lang, Text::High),
                fmt_temp_value(lang, today.temperature_max_c),
                text(lang, Text::Low),
                fmt_temp_value(lang, today.temperature_min_c)
            ),
            Style::default().fg(theme.muted_text),
        )));
    }

    lines
}
