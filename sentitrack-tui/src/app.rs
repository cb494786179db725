//! Application state — tab navigation, selections, status line.
//!
//! Every mutation that changes what the panels show goes through
//! `refresh_model`, so the render side only ever reads a prebuilt
//! [`DashboardModel`].

use std::path::Path;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use sentitrack_core::export::{self, EXPORT_FILE};
use sentitrack_core::{DashboardModel, Datasets, RangeSelection, Selections};

/// Tabs along the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    Overview,
    Trend,
    Insights,
    Help,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Trend, Tab::Insights, Tab::Help];

    pub fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Trend => 1,
            Tab::Insights => 2,
            Tab::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Tab> {
        Tab::ALL.get(i).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Sentiment vs Returns",
            Tab::Trend => "Trend",
            Tab::Insights => "Data & Insights",
            Tab::Help => "Help",
        }
    }

    pub fn next(&self) -> Tab {
        Tab::from_index((self.index() + 1) % Tab::ALL.len()).unwrap()
    }

    pub fn prev(&self) -> Tab {
        Tab::from_index((self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()).unwrap()
    }
}

/// Severity of the status line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
}

/// Top-level application state.
pub struct App {
    pub datasets: Datasets,
    pub selections: Selections,
    /// Prebuilt render model; rebuilt on every selection change.
    pub model: DashboardModel,

    pub active_tab: Tab,
    pub running: bool,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
}

impl App {
    pub fn new(datasets: Datasets) -> Self {
        let selections = Selections::default();
        let model = DashboardModel::build(&datasets, &selections);
        let mut app = Self {
            datasets,
            selections,
            model,
            active_tab: Tab::Overview,
            running: true,
            overlay: Overlay::None,
            status_message: None,
        };
        if app.datasets.merged.is_empty() {
            app.set_warning("Merged dataset has no rows; charts and insights are empty");
        } else {
            app.set_status(format!(
                "Loaded {} sentiment, {} price, {} merged rows",
                app.datasets.sentiment.len(),
                app.datasets.prices.len(),
                app.datasets.merged.len(),
            ));
        }
        app
    }

    /// Rebuild the render model after a selection change.
    pub fn refresh_model(&mut self) {
        self.model = DashboardModel::build(&self.datasets, &self.selections);
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    /// Cycle the selected coin forward or back.
    pub fn cycle_coin(&mut self, forward: bool) {
        self.selections.coin = if forward {
            self.selections.coin.next()
        } else {
            self.selections.coin.prev()
        };
        self.refresh_model();
        self.set_status(format!("Coin: {}", self.selections.coin.label()));
    }

    /// Move the range start by `days`, clamped to [data start, range end].
    pub fn step_start(&mut self, days: i64) {
        let Some((min, _, start, end)) = self.clamped_window() else {
            self.set_warning("No merged rows; range keys are inactive");
            return;
        };
        let start = (start + Duration::days(days)).clamp(min, end);
        self.selections.range = RangeSelection::Between(start, end);
        self.refresh_model();
        self.show_window();
    }

    /// Move the range end by `days`, clamped to [range start, data end].
    pub fn step_end(&mut self, days: i64) {
        let Some((_, max, start, end)) = self.clamped_window() else {
            self.set_warning("No merged rows; range keys are inactive");
            return;
        };
        let end = (end + Duration::days(days)).clamp(start, max);
        self.selections.range = RangeSelection::Between(start, end);
        self.refresh_model();
        self.show_window();
    }

    /// Reset the range to the full data span.
    pub fn reset_range(&mut self) {
        self.selections.range = RangeSelection::Full;
        self.refresh_model();
        self.show_window();
    }

    /// Write the full merged table to the working directory.
    pub fn export_merged(&mut self) {
        match export::save_csv(&self.datasets.merged, Path::new(EXPORT_FILE)) {
            Ok(()) => self.set_status(format!(
                "Exported {} rows to {EXPORT_FILE}",
                self.datasets.merged.len()
            )),
            Err(err) => self.set_error(format!("Export failed: {err}")),
        }
    }

    /// Data span plus the resolved window, both clamped to the data, as
    /// (span start, span end, window start, window end). None when the
    /// merged table is empty.
    fn clamped_window(&self) -> Option<(NaiveDate, NaiveDate, NaiveDate, NaiveDate)> {
        let (min, max) = self.datasets.merged.span()?;
        let (start, end) = self.selections.range.resolve(&self.datasets.merged)?;
        if start > end {
            return Some((min, max, min, max));
        }
        let end = end.clamp(min, max);
        let start = start.clamp(min, end);
        Some((min, max, start, end))
    }

    fn show_window(&mut self) {
        match self.model.window {
            Some((start, end)) => self.set_status(format!(
                "View: {start} .. {end} ({} rows)",
                self.model.row_count
            )),
            None => self.set_warning("View is empty"),
        }
    }
}
