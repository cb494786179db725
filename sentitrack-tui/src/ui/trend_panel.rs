//! Tab 2 — Trend: raw daily sentiment with the 3-day smoothed overlay.

use ratatui::layout::Rect;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{date_labels, day_offset, value_bounds, y_labels};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let m = &app.model;
    let Some((start, end)) = m.window else {
        render_empty(f, area);
        return;
    };
    if m.is_view_empty() {
        render_empty(f, area);
        return;
    }

    let raw: Vec<(f64, f64)> = m
        .sentiment
        .iter()
        .map(|&(d, v)| (day_offset(d, start), v))
        .collect();
    let smoothed: Vec<(f64, f64)> = m
        .smoothed
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|&(d, v)| (day_offset(d, start), v))
        .collect();

    let x_max = day_offset(end, start).max(1.0);
    let zero = [(0.0, 0.0), (x_max, 0.0)];
    let bounds = value_bounds(raw.iter().chain(smoothed.iter()).map(|&(_, v)| v));

    let mut datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .style(theme::muted())
            .graph_type(GraphType::Line)
            .data(&zero),
        Dataset::default()
            .name("sentiment_mean")
            .marker(symbols::Marker::Braille)
            .style(theme::sentiment_series())
            .graph_type(GraphType::Line)
            .data(&raw),
    ];
    if !smoothed.is_empty() {
        datasets.push(
            Dataset::default()
                .name("sentiment_mean_3d")
                .marker(symbols::Marker::Dot)
                .style(theme::smoothed_series())
                .graph_type(GraphType::Line)
                .data(&smoothed),
        );
    }

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(date_labels(start, end)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Sentiment", theme::muted()))
                .style(theme::muted())
                .bounds(bounds)
                .labels(y_labels(bounds)),
        );
    f.render_widget(chart, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "No rows in the selected range.",
            theme::warning(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to reset to the full span.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
