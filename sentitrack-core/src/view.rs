//! Per-interaction render model.
//!
//! `DashboardModel::build` is a pure function of the loaded tables and the
//! current selections. Panels draw from the model and never touch polars;
//! every selection change rebuilds the model from scratch.

use chrono::NaiveDate;

use crate::coin::Coin;
use crate::filter::{filter_range, RangeSelection};
use crate::load::Datasets;
use crate::stats::{correlation_matrix, round3, CorrelationMatrix, CORRELATION_COLUMNS};
use crate::table::DateTable;

/// Rows shown in the insights tail table.
pub const TAIL_ROWS: usize = 10;

/// Current widget selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selections {
    pub coin: Coin,
    pub range: RangeSelection,
}

impl Default for Selections {
    fn default() -> Self {
        Self {
            coin: Coin::Btc,
            range: RangeSelection::Full,
        }
    }
}

/// Last rows of the filtered view, values rounded to 3 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct TailSnapshot {
    /// Non-date column names in frame order.
    pub columns: Vec<String>,
    pub rows: Vec<TailRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TailRow {
    pub date: NaiveDate,
    /// One entry per column; None renders blank.
    pub values: Vec<Option<f64>>,
}

/// Everything the panels render for one interaction.
#[derive(Debug, Clone)]
pub struct DashboardModel {
    pub coin: Coin,
    /// Resolved closed interval of the current view. None when the merged
    /// table is empty.
    pub window: Option<(NaiveDate, NaiveDate)>,
    /// Full span of the merged table. None when it is empty.
    pub span: Option<(NaiveDate, NaiveDate)>,
    /// Rows in the filtered view.
    pub row_count: usize,
    /// Daily sentiment points inside the window.
    pub sentiment: Vec<(NaiveDate, f64)>,
    /// 3-day smoothed sentiment, None when the column is absent.
    pub smoothed: Option<Vec<(NaiveDate, f64)>>,
    /// Selected coin's next-day returns, None when the column is absent.
    pub returns: Option<Vec<(NaiveDate, f64)>>,
    /// Correlation over the full merged table, not the filtered view.
    pub correlation: CorrelationMatrix,
    pub tail: TailSnapshot,
}

impl DashboardModel {
    pub fn build(datasets: &Datasets, selections: &Selections) -> Self {
        let merged = &datasets.merged;
        let view = filter_range(merged, selections.range);
        Self {
            coin: selections.coin,
            window: selections.range.resolve(merged),
            span: merged.span(),
            row_count: view.len(),
            sentiment: view.date_series("sentiment_mean").unwrap_or_default(),
            smoothed: view.date_series("sentiment_mean_3d"),
            returns: view.date_series(selections.coin.return_column()),
            correlation: correlation_matrix(merged, &CORRELATION_COLUMNS),
            tail: tail_snapshot(&view),
        }
    }

    /// True when there is nothing to chart for the current window.
    pub fn is_view_empty(&self) -> bool {
        self.row_count == 0
    }
}

fn tail_snapshot(view: &DateTable) -> TailSnapshot {
    let tail = view.tail(TAIL_ROWS);
    let columns = tail.value_columns();
    let series: Vec<Vec<Option<f64>>> = columns
        .iter()
        .map(|c| tail.numeric_column(c).unwrap_or_default())
        .collect();
    let rows = tail
        .dates()
        .iter()
        .enumerate()
        .map(|(i, date)| TailRow {
            date: *date,
            values: series
                .iter()
                .map(|s| s.get(i).copied().flatten().map(round3))
                .collect(),
        })
        .collect();
    TailSnapshot { columns, rows }
}
