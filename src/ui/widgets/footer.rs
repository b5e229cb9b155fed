use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::AppState;
use crate::i18n::{Text, text};
use crate::ui::theme::Theme;
use crate::ui::widgets::shared::direction_alignment;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let lang = state.lang();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let mut attribution = text(lang, Text::FooterAttribution).to_string();
    if let Some(snapshot) = &state.snapshot {
        attribution.push_str(&format!(
            "  ·  {} {}",
            text(lang, Text::FooterUpdated),
            snapshot.fetched_at.format("%H:%M")
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            attribution,
            Style::default().fg(theme.muted_text),
        )))
        .alignment(direction_alignment(lang)),
        chunks[0],
    );

    let hints = Paragraph::new(Line::from(Span::styled(
        "Tab ⚙  Enter ↵  ←/→  Esc ✕",
        Style::default().fg(theme.muted_text),
    )))
    .alignment(match direction_alignment(lang) {
        Alignment::Right => Alignment::Left,
        _ => Alignment::Right,
    });
    frame.render_widget(hints, chunks[1]);
}
