//! Date-indexed immutable tables.
//!
//! `DateTable` is the canonical in-memory form of a loaded dataset: a polars
//! frame sorted ascending by its `date` column, plus the extracted date index
//! so range slicing is a binary search followed by a contiguous row slice.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::schema::SchemaError;

/// A loaded dataset. Never mutated after construction; filtered views are
/// new `DateTable` values sharing column storage with the parent.
#[derive(Debug, Clone)]
pub struct DateTable {
    frame: DataFrame,
    dates: Vec<NaiveDate>,
}

impl DateTable {
    /// Wrap a canonicalized frame. The `date` column must have Date dtype,
    /// contain no nulls, and be strictly ascending (which implies no
    /// duplicate dates).
    pub fn new(frame: DataFrame) -> Result<Self, SchemaError> {
        let dates = extract_dates(&frame)?;
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SchemaError::UnsortedDates);
        }
        Ok(Self { frame, dates })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Date index, ascending, one entry per row.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// (first, last) date, or None for an empty table.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.dates.first()?, *self.dates.last()?))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.frame.schema().contains(name)
    }

    /// Non-date column names in frame order.
    pub fn value_columns(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|s| s.as_str())
            .filter(|n| *n != "date")
            .map(str::to_string)
            .collect()
    }

    /// Closed-interval view: rows with `start <= date <= end`. An empty
    /// table or an inverted interval yields an empty view, never an error.
    pub fn slice_range(&self, start: NaiveDate, end: NaiveDate) -> DateTable {
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d <= end);
        if lo >= hi {
            return DateTable {
                frame: self.frame.slice(0, 0),
                dates: Vec::new(),
            };
        }
        DateTable {
            frame: self.frame.slice(lo as i64, hi - lo),
            dates: self.dates[lo..hi].to_vec(),
        }
    }

    /// Last `n` rows (the whole table when shorter).
    pub fn tail(&self, n: usize) -> DateTable {
        let skip = self.dates.len().saturating_sub(n);
        DateTable {
            frame: self.frame.slice(skip as i64, n),
            dates: self.dates[skip..].to_vec(),
        }
    }

    /// Column values as f64, nulls preserved, integer columns cast on the
    /// fly. None when the column is absent or non-numeric.
    pub fn numeric_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let column = self.frame.column(name).ok()?;
        if !crate::schema::is_numeric(column.dtype()) {
            return None;
        }
        let casted = column.cast(&DataType::Float64).ok()?;
        let values = casted.f64().ok()?;
        Some(values.iter().collect())
    }

    /// (date, value) pairs for charting, rows with a null value skipped.
    /// None when the column is absent.
    pub fn date_series(&self, name: &str) -> Option<Vec<(NaiveDate, f64)>> {
        let values = self.numeric_column(name)?;
        Some(
            self.dates
                .iter()
                .copied()
                .zip(values)
                .filter_map(|(d, v)| v.map(|v| (d, v)))
                .collect(),
        )
    }
}

fn extract_dates(frame: &DataFrame) -> Result<Vec<NaiveDate>, SchemaError> {
    let column = frame
        .column("date")
        .map_err(|_| SchemaError::MissingColumn("date".to_string()))?;
    let chunked = column.date().map_err(|_| SchemaError::BadDateColumn {
        dtype: column.dtype().clone(),
    })?;
    let mut dates = Vec::with_capacity(chunked.len());
    let mut nulls = 0usize;
    for value in chunked.as_date_iter() {
        match value {
            Some(d) => dates.push(d),
            None => nulls += 1,
        }
    }
    if nulls > 0 {
        return Err(SchemaError::NullDates(nulls));
    }
    Ok(dates)
}
