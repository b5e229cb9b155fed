use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use crate::i18n::{Text, text};
use crate::ui::theme::Theme;
use crate::ui::widgets::shared::{login_error_text, spinner_frame};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let lang = state.lang();
    let box_area = centered_box(area);

    let block = Block::default()
        .title(text(lang, Text::LoginTitle))
        .borders(Borders::ALL)
        .style(Style::default().bg(theme.surface).fg(theme.text))
        .border_style(Style::default().fg(theme.accent));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(text(lang, Text::LoginPrompt))
            .style(Style::default().fg(theme.muted_text))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let input = Line::from(vec![
        Span::styled(
            state.login.name.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled("█", Style::default().fg(theme.accent)),
    ]);
    frame.render_widget(
        Paragraph::new(input).alignment(Alignment::Center),
        chunks[1],
    );

    let status = if state.login.submitting {
        Line::from(Span::styled(
            format!(
                "{} {}",
                spinner_frame(state.frame_tick),
                text(lang, Text::LoginPending)
            ),
            Style::default().fg(theme.accent),
        ))
    } else if let Some(error) = state.login.error {
        Line::from(Span::styled(
            login_error_text(lang, error),
            Style::default().fg(theme.danger),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new(text(lang, Text::LoginHint))
            .style(Style::default().fg(theme.muted_text))
            .alignment(Alignment::Center),
        chunks[4],
    );
}

fn centered_box(area: Rect) -> Rect {
    let width = 40.min(area.width);
    let height = 7.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
