use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use crate::i18n::{Text, text};
use crate::ui::theme::Theme;
use crate::ui::widgets::shared::{direction_alignment, search_error_text, spinner_frame};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let lang = state.lang();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (title_area, search_area) = match direction_alignment(lang) {
        Alignment::Right => (chunks[1], chunks[0]),
        _ => (chunks[0], chunks[1]),
    };

    render_title(frame, title_area, state, theme);
    render_search_box(frame, search_area, state, theme);
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let lang = state.lang();
    let mut title = text(lang, Text::AppTitle).to_string();
    if let Some(name) = &state.user_name {
        title = format!("{title} — {name}");
    }

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("☀ ", Style::default().fg(theme.accent)),
        Span::styled(title, Style::default().fg(theme.text)),
    ]))
    .alignment(direction_alignment(lang))
    .block(Block::default().borders(Borders::ALL).border_style(
        Style::default().fg(theme.border),
    ));
    frame.render_widget(paragraph, area);
}

fn render_search_box(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let lang = state.lang();

    let content = if state.search_in_flight {
        Line::from(vec![
            Span::styled(
                spinner_frame(state.frame_tick),
                Style::default().fg(theme.accent),
            ),
            Span::raw(" "),
            Span::styled(
                text(lang, Text::Loading),
                Style::default().fg(theme.muted_text),
            ),
        ])
    } else if state.search_input.is_empty() {
        Line::from(Span::styled(
            text(lang, Text::SearchPlaceholder),
            Style::default().fg(theme.muted_text),
        ))
    } else {
        Line::from(vec![
            Span::styled(state.search_input.clone(), Style::default().fg(theme.text)),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(text(lang, Text::SearchLabel))
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.muted_text));
    frame.render_widget(
        Paragraph::new(content)
            .alignment(direction_alignment(lang))
            .block(block),
        area,
    );
}

/// One-line inline message under the header; dismissed with Esc.
pub fn render_error_line(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let lang = state.lang();
    let Some(error) = &state.error else {
        return;
    };

    let line = Line::from(vec![
        Span::styled(
            search_error_text(lang, error),
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            text(lang, Text::DismissHint),
            Style::default().fg(theme.muted_text),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(direction_alignment(lang)),
        area,
    );
}
