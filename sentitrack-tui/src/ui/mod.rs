//! Top-level UI layout — tabbed dashboard frame with status bar.

pub mod help_panel;
pub mod insights_panel;
pub mod overview_panel;
pub mod status_bar;
pub mod trend_panel;

use chrono::{Duration, NaiveDate};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::app::{App, Overlay, Tab};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &App) {
    // Split: 3-line header + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    draw_tab(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    if app.overlay == Overlay::Welcome {
        render_welcome(f, chunks[1]);
    }
}

/// Title row, tab strip, and the controls line with the current view.
fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(" Crypto News Sentiment Tracker ", theme::accent_bold()),
        Span::styled("(BTC / ETH / SOL)", theme::muted()),
    ]);
    f.render_widget(Paragraph::new(title), rows[0]);

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|t| Line::from(format!(" {} [{}] ", t.label(), t.index() + 1)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(theme::muted())
        .highlight_style(theme::tab_highlight())
        .divider("|");
    f.render_widget(tabs, rows[1]);

    f.render_widget(Paragraph::new(controls_line(app)), rows[2]);
}

fn controls_line(app: &App) -> Line<'static> {
    let m = &app.model;
    match (m.window, m.span) {
        (Some((start, end)), Some((min, max))) => Line::from(vec![
            Span::styled(format!(" Coin: {} ", m.coin.label()), theme::accent()),
            Span::styled(
                format!("| View: {start} .. {end} ({} rows) ", m.row_count),
                theme::text(),
            ),
            Span::styled(format!("| Data: {min} .. {max}"), theme::muted()),
        ]),
        _ => Line::from(Span::styled(
            " No merged rows loaded; charts and insights are empty",
            theme::warning(),
        )),
    }
}

/// Draw the active tab inside a bordered frame.
fn draw_tab(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {} ", app.active_tab.label()))
        .title_style(theme::accent_bold());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.active_tab {
        Tab::Overview => overview_panel::render(f, inner, app),
        Tab::Trend => trend_panel::render(f, inner, app),
        Tab::Insights => insights_panel::render(f, inner, app),
        Tab::Help => help_panel::render(f, inner, app),
    }
}

/// First-run welcome overlay.
fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 45, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to SentiTrack ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Tabs 1-4 switch views; Tab / Shift+Tab cycle",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. h/l move the range start, j/k the end, r resets",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. c cycles the coin (BTC, ETH, SOL)",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. x on the Insights tab exports the merged CSV",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

// ─── Shared chart helpers ───

/// X position of a date, in days since the window start.
pub(crate) fn day_offset(date: NaiveDate, start: NaiveDate) -> f64 {
    (date - start).num_days() as f64
}

/// Start / middle / end date labels for a shared x axis.
pub(crate) fn date_labels(start: NaiveDate, end: NaiveDate) -> Vec<Span<'static>> {
    let mid = start + Duration::days((end - start).num_days() / 2);
    vec![
        Span::styled(start.to_string(), theme::muted()),
        Span::styled(mid.to_string(), theme::muted()),
        Span::styled(end.to_string(), theme::muted()),
    ]
}

/// Y bounds covering the values and the zero line, with 5% padding.
pub(crate) fn value_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let mut min = 0.0_f64;
    let mut max = 0.0_f64;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min == max {
        return [min - 1.0, max + 1.0];
    }
    let padding = (max - min) * 0.05;
    [min - padding, max + padding]
}

/// Two-decimal labels for a y axis, evenly spread like ratatui draws them.
pub(crate) fn y_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        Span::styled(format!("{:.2}", bounds[0]), theme::muted()),
        Span::styled(format!("{mid:.2}"), theme::muted()),
        Span::styled(format!("{:.2}", bounds[1]), theme::muted()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    #[test]
    fn day_offsets_count_from_window_start() {
        assert_eq!(day_offset(day(1), day(1)), 0.0);
        assert_eq!(day_offset(day(28), day(1)), 27.0);
    }

    #[test]
    fn value_bounds_cover_zero() {
        let b = value_bounds([0.2, 0.5, 0.9].into_iter());
        assert!(b[0] < 0.0 && b[0] > -0.1);
        assert!(b[1] > 0.9);

        let b = value_bounds([-2.0, -0.5].into_iter());
        assert!(b[0] < -2.0);
        assert!(b[1] > 0.0);
    }

    #[test]
    fn flat_series_gets_nonzero_height() {
        let b = value_bounds(std::iter::empty());
        assert!(b[0] < b[1]);
    }

    #[test]
    fn date_labels_bracket_the_window() {
        let labels = date_labels(day(1), day(28));
        assert_eq!(labels[0].content, "2026-02-01");
        assert_eq!(labels[1].content, "2026-02-14");
        assert_eq!(labels[2].content, "2026-02-28");
    }
}
