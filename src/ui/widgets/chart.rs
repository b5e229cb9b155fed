//! Monthly average-temperature chart over the trailing year.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::app::state::AppState;
use crate::domain::monthly::MonthlyPoint;
use crate::i18n::{Text, text};
use crate::ui::theme::Theme;
use crate::ui::widgets::shared::direction_alignment;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let lang = state.lang();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(text(lang, Text::MonthlyChartTitle))
        .style(Style::default().bg(theme.surface).fg(theme.text))
        .border_style(Style::default().fg(theme.border));

    let series = state
        .snapshot
        .as_ref()
        .map(|snapshot| snapshot.monthly.as_slice())
        .unwrap_or_default();

    if series.len() < 2 {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let placeholder = Paragraph::new(text(lang, Text::NotAvailable))
            .style(Style::default().fg(theme.muted_text))
            .alignment(direction_alignment(lang));
        frame.render_widget(placeholder, inner);
        return;
    }

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(idx, point)| (idx as f64, point.temperature_c))
        .collect();

    let (y_min, y_max) = temperature_bounds(series);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.chart_line))
        .data(&points);

    let x_labels = edge_labels(series)
        .into_iter()
        .map(|label| Span::styled(label, Style::default().fg(theme.muted_text)))
        .collect::<Vec<_>>();

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, (series.len() - 1) as f64])
                .labels(x_labels)
                .style(Style::default().fg(theme.border)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(
                        format!("{y_min:.0}°"),
                        Style::default().fg(theme.muted_text),
                    ),
                    Span::styled(
                        format!("{:.0}°", (y_min + y_max) / 2.0),
                        Style::default().fg(theme.muted_text),
                    ),
                    Span::styled(
                        format!("{y_max:.0}°"),
                        Style::default()
                            .fg(theme.muted_text)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
                .style(Style::default().fg(theme.border)),
        );

    frame.render_widget(chart, area);
}

/// First, middle and last month labels for the x axis.
fn edge_labels(series: &[MonthlyPoint]) -> Vec<String> {
    let mid = series.len() / 2;
    vec![
        series[0].label.clone(),
        series[mid].label.clone(),
        series[series.len() - 1].label.clone(),
    ]
}

/// Y bounds padded by one degree so the line never hugs the frame.
fn temperature_bounds(series: &[MonthlyPoint]) -> (f64, f64) {
    let min = series
        .iter()
        .map(|p| p.temperature_c)
        .fold(f64::INFINITY, f64::min);
    let max = series
        .iter()
        .map(|p| p.temperature_c)
        .fold(f64::NEG_INFINITY, f64::max);
    (min.floor() - 1.0, max.ceil() + 1.0)
}
