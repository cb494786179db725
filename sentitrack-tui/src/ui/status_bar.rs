//! Bottom status bar: key hints, then the most recent app message.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, StatusLevel};
use crate::theme;

const KEY_HINTS: &str = " 1:Overview 2:Trend 3:Insights 4:Help q:quit";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut line = Line::from(Span::styled(KEY_HINTS, theme::muted()));
    if let Some((msg, level)) = &app.status_message {
        line.push_span(Span::raw(" | "));
        line.push_span(Span::styled(msg.as_str(), level_style(level)));
    }
    f.render_widget(Paragraph::new(line), area);
}

fn level_style(level: &StatusLevel) -> Style {
    match level {
        StatusLevel::Info => theme::accent(),
        StatusLevel::Warning => theme::warning(),
        StatusLevel::Error => theme::negative(),
    }
}
