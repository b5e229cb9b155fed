pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppMode, AppState};
use crate::ui::theme::theme_for;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = theme_for(state.settings.theme);

    if area.width < 40 || area.height < 20 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 40x20.")
            .block(Block::default().borders(Borders::ALL).title("skydash"));
        frame.render_widget(warning, area);
        return;
    }

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    match state.mode {
        AppMode::Login => widgets::login::render(frame, area, state, theme),
        AppMode::Dashboard | AppMode::Quit => render_dashboard(frame, area, state, theme),
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState, theme: theme::Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(9),
            Constraint::Length(1),
        ])
        .split(area);

    widgets::header::render(frame, chunks[0], state, theme);
    widgets::header::render_error_line(frame, chunks[1], state, theme);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    widgets::overview::render(frame, main[0], state, theme);
    widgets::chart::render(frame, main[1], state, theme);

    widgets::forecast::render(frame, chunks[3], state, theme);
    widgets::footer::render(frame, chunks[4], state, theme);

    if state.settings_open {
        widgets::settings::render(frame, centered_rect(44, 11, area), state, theme);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(100, 100, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
