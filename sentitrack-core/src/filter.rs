//! Date-range selection and filtering.
//!
//! Selections are resolved against a table's actual span at use time, so a
//! stale or degenerate selection can never produce an out-of-bounds error:
//! `Full` and the single-endpoint `Single` both resolve to the full span,
//! and an inverted `Between` simply yields an empty view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::table::DateTable;

/// User-selected date interval over the merged table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeSelection {
    /// Whole data span.
    Full,
    /// Only one endpoint picked; treated as the full span.
    Single(NaiveDate),
    /// Closed interval [start, end].
    Between(NaiveDate, NaiveDate),
}

impl RangeSelection {
    /// Concrete [start, end] for a table, or None when the table is empty.
    pub fn resolve(&self, table: &DateTable) -> Option<(NaiveDate, NaiveDate)> {
        let (min, max) = table.span()?;
        match *self {
            RangeSelection::Full | RangeSelection::Single(_) => Some((min, max)),
            RangeSelection::Between(start, end) => Some((start, end)),
        }
    }
}

/// Row-contiguous view of `table` bounded by the resolved interval.
pub fn filter_range(table: &DateTable, selection: RangeSelection) -> DateTable {
    match selection.resolve(table) {
        Some((start, end)) => table.slice_range(start, end),
        None => table.clone(),
    }
}
