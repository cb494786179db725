//! Tab 3 — Data & Insights: correlation matrix, latest rows, export hint.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use sentitrack_core::view::TAIL_ROWS;

use crate::app::App;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let m = &app.model;
    if m.span.is_none() {
        render_empty(f, area);
        return;
    }

    let matrix_height = m.correlation.columns.len() as u16 + 1;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(matrix_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    heading(f, chunks[0], "Pearson correlation (full dataset)");
    render_correlation(f, chunks[1], app);
    heading(
        f,
        chunks[3],
        &format!("Last {TAIL_ROWS} rows of the current view"),
    );
    render_tail(f, chunks[4], app);
    f.render_widget(
        Paragraph::new(Span::styled(
            " x: export merged CSV | h/l j/k: adjust range | r: reset",
            theme::muted(),
        )),
        chunks[5],
    );
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Merged dataset is empty; nothing to summarize.",
            theme::warning(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn heading(f: &mut Frame, area: Rect, text: &str) {
    f.render_widget(
        Paragraph::new(Span::styled(text.to_string(), theme::accent_bold())),
        area,
    );
}

fn render_correlation(f: &mut Frame, area: Rect, app: &App) {
    let matrix = &app.model.correlation;

    let header = Row::new(
        std::iter::once(Cell::from("")).chain(
            matrix
                .columns
                .iter()
                .map(|c| Cell::from(c.as_str()).style(theme::accent())),
        ),
    );
    let rows = matrix.columns.iter().zip(&matrix.values).map(|(name, row)| {
        Row::new(
            std::iter::once(Cell::from(name.as_str()).style(theme::accent()))
                .chain(row.iter().map(|v| correlation_cell(v))),
        )
    });

    let mut widths = vec![Constraint::Length(18)];
    widths.extend(std::iter::repeat(Constraint::Length(18)).take(matrix.columns.len()));

    f.render_widget(Table::new(rows, widths).header(header), area);
}

/// Signed 3-decimal cell on the diverging scale; blank when undefined.
fn correlation_cell(value: &Option<f64>) -> Cell<'static> {
    match value {
        Some(r) => Cell::from(format!("{r:+.3}"))
            .style(Style::default().fg(theme::correlation_color(*r))),
        None => Cell::from(""),
    }
}

fn render_tail(f: &mut Frame, area: Rect, app: &App) {
    let tail = &app.model.tail;

    let header = Row::new(
        std::iter::once(Cell::from("date").style(theme::accent())).chain(
            tail.columns
                .iter()
                .map(|c| Cell::from(c.as_str()).style(theme::accent())),
        ),
    );
    let rows = tail.rows.iter().map(|row| {
        Row::new(
            std::iter::once(Cell::from(row.date.to_string()).style(theme::text()))
                .chain(row.values.iter().map(value_cell)),
        )
    });

    let mut widths = vec![Constraint::Length(12)];
    widths.extend(std::iter::repeat(Constraint::Length(18)).take(tail.columns.len()));

    f.render_widget(Table::new(rows, widths).header(header), area);
}

fn value_cell(value: &Option<f64>) -> Cell<'static> {
    match value {
        Some(v) => {
            Cell::from(format!("{v:.3}")).style(Style::default().fg(theme::signed_color(*v)))
        }
        None => Cell::from(""),
    }
}
