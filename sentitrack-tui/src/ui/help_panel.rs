//! Tab 4 — Help: keyboard shortcuts and input file documentation.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use sentitrack_core::export::EXPORT_FILE;
use sentitrack_core::load::{MERGED_FILE, PRICES_FILE, SENTIMENT_FILE};

use crate::app::App;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global");
    key(&mut lines, "1-4", "Switch to tab by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle tabs forward / back");
    key(&mut lines, "q", "Quit (selections are saved)");
    lines.push(Line::from(""));

    section(&mut lines, "Date range (tabs 1-3)");
    key(&mut lines, "h / l", "Range start -1 / +1 day");
    key(&mut lines, "H / L", "Range start -7 / +7 days");
    key(&mut lines, "j / k", "Range end -1 / +1 day");
    key(&mut lines, "J / K", "Range end -7 / +7 days");
    key(&mut lines, "r", "Reset to the full data span");
    lines.push(Line::from(""));

    section(&mut lines, "Coin (tabs 1-3)");
    key(&mut lines, "c / C", "Next / previous coin (BTC, ETH, SOL)");
    lines.push(Line::from(""));

    section(&mut lines, "Tab 3 — Data & Insights");
    key(&mut lines, "x", "Export the merged table as CSV");
    lines.push(Line::from(""));

    section(&mut lines, "Input files (working directory)");
    key(&mut lines, SENTIMENT_FILE, "Daily news sentiment (VADER)");
    key(&mut lines, PRICES_FILE, "Daily BTC/ETH/SOL closes");
    key(&mut lines, MERGED_FILE, "Sentiment joined with next-day returns");
    lines.push(Line::from(""));

    section(&mut lines, "Output");
    key(&mut lines, EXPORT_FILE, "Written by x, next to the inputs");
    key(
        &mut lines,
        "state.json",
        "UI selections, under <config_dir>/sentitrack/",
    );

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>32}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
