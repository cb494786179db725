//! Tab 1 — Sentiment vs Returns: two stacked panes sharing an x axis.
//!
//! The sentiment pane draws the daily series (plus the 3-day smoothed
//! overlay when present) on its own scale; the pane below draws the
//! selected coin's next-day percentage return as bars on an independent
//! scale. Both panes carry a zero reference line.

use chrono::NaiveDate;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
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

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_sentiment_pane(f, panes[0], app, start, end);
    render_returns_pane(f, panes[1], app, start, end);
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

fn render_sentiment_pane(f: &mut Frame, area: Rect, app: &App, start: NaiveDate, end: NaiveDate) {
    let m = &app.model;
    let sentiment: Vec<(f64, f64)> = m
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
    let bounds = value_bounds(
        sentiment
            .iter()
            .chain(smoothed.iter())
            .map(|&(_, v)| v),
    );

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
            .data(&sentiment),
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

fn render_returns_pane(f: &mut Frame, area: Rect, app: &App, start: NaiveDate, end: NaiveDate) {
    let m = &app.model;
    let Some(returns) = &m.returns else {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("No {} column in the merged dataset", m.coin.return_column()),
                theme::warning(),
            )),
            area,
        );
        return;
    };

    let gains: Vec<(f64, f64)> = returns
        .iter()
        .filter(|&&(_, v)| v >= 0.0)
        .map(|&(d, v)| (day_offset(d, start), v))
        .collect();
    let losses: Vec<(f64, f64)> = returns
        .iter()
        .filter(|&&(_, v)| v < 0.0)
        .map(|&(d, v)| (day_offset(d, start), v))
        .collect();

    let x_max = day_offset(end, start).max(1.0);
    let zero = [(0.0, 0.0), (x_max, 0.0)];
    let bounds = value_bounds(returns.iter().map(|&(_, v)| v));

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .style(theme::muted())
            .graph_type(GraphType::Line)
            .data(&zero),
        Dataset::default()
            .name(format!("{} next-day %", m.coin.label()))
            .marker(symbols::Marker::HalfBlock)
            .style(theme::positive())
            .graph_type(GraphType::Bar)
            .data(&gains),
        Dataset::default()
            .marker(symbols::Marker::HalfBlock)
            .style(theme::negative())
            .graph_type(GraphType::Bar)
            .data(&losses),
    ];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(date_labels(start, end)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Return %", theme::muted()))
                .style(theme::muted())
                .bounds(bounds)
                .labels(y_labels(bounds)),
        );
    f.render_widget(chart, area);
}
