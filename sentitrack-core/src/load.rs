//! CSV dataset loading with a two-stage date-index fallback.
//!
//! Stage 1 (primary): the first column is the date index, whatever its
//! header says, and is renamed to `date`; parsing is strict, so a single
//! bad or missing cell fails the stage.
//! Stage 2 (fallback): the first column whose name looks date-like is
//! coerced non-strictly and rows whose date failed to parse are dropped.
//!
//! After either stage the frame is sorted ascending and duplicate dates are
//! dropped keeping the first occurrence in file order. Both stages failing,
//! a missing file, or a schema violation is fatal: the dashboard has no
//! partial-data mode.

use std::path::{Path, PathBuf};

use polars::prelude::*;
use thiserror::Error;

use crate::schema::{self, SchemaError, TableSchema};
use crate::table::DateTable;

/// Fixed relative paths of the three input datasets.
pub const SENTIMENT_FILE: &str = "daily_sentiment_vader.csv";
pub const PRICES_FILE: &str = "daily_prices_btc_eth_sol.csv";
pub const MERGED_FILE: &str = "merged_sentiment_prices_final.csv";

/// Errors from the dataset loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{name}: cannot read '{path}': {reason}")]
    Read {
        name: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error(
        "{name}: no usable date index in '{path}' \
         (strict first-column parse: {primary}; date-column fallback: {fallback})"
    )]
    NoDateIndex {
        name: &'static str,
        path: PathBuf,
        primary: String,
        fallback: String,
    },

    #[error("{name}: '{path}': {source}")]
    Schema {
        name: &'static str,
        path: PathBuf,
        source: SchemaError,
    },
}

/// The three datasets, loaded once at startup and owned immutably for the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub sentiment: DateTable,
    pub prices: DateTable,
    pub merged: DateTable,
}

/// Load all three datasets from `dir`. Any failure aborts the whole load.
pub fn load_all(dir: &Path) -> Result<Datasets, LoadError> {
    Ok(Datasets {
        sentiment: load_dataset(&dir.join(SENTIMENT_FILE), &schema::SENTIMENT)?,
        prices: load_dataset(&dir.join(PRICES_FILE), &schema::PRICES)?,
        merged: load_dataset(&dir.join(MERGED_FILE), &schema::MERGED)?,
    })
}

/// Load one dataset: read, resolve the date index (two stages), sort,
/// dedupe, and validate against `table_schema`.
pub fn load_dataset(path: &Path, table_schema: &TableSchema) -> Result<DateTable, LoadError> {
    let raw = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .and_then(|lf| lf.collect())
        .map_err(|e| LoadError::Read {
            name: table_schema.name,
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let parsed = match primary_stage(raw.clone()) {
        Ok(df) => df,
        Err(primary) => match fallback_stage(raw) {
            Ok(df) => df,
            Err(fallback) => {
                return Err(LoadError::NoDateIndex {
                    name: table_schema.name,
                    path: path.to_path_buf(),
                    primary: primary.to_string(),
                    fallback: fallback.to_string(),
                })
            }
        },
    };

    table_schema
        .validate(&parsed)
        .and_then(|_| DateTable::new(parsed))
        .map_err(|e| LoadError::Schema {
            name: table_schema.name,
            path: path.to_path_buf(),
            source: e,
        })
}

// ─── Parse stages ───────────────────────────────────────────────────

/// Stage 1: the first column is the index, whatever it is called. A missing
/// value counts as unparseable so the fallback gets a chance to drop it.
fn primary_stage(raw: DataFrame) -> PolarsResult<DataFrame> {
    let first = match raw.get_column_names().first() {
        Some(name) => name.to_string(),
        None => return Err(PolarsError::NoData("csv has no columns".into())),
    };
    let parsed = with_date_column(raw, &first, true)?;
    let nulls = parsed.column("date")?.null_count();
    if nulls > 0 {
        return Err(PolarsError::ComputeError(
            format!("date index contains {nulls} empty value(s)").into(),
        ));
    }
    canonicalize(parsed)
}

/// Stage 2: first date-like column by name, lenient coercion, bad rows
/// dropped.
fn fallback_stage(raw: DataFrame) -> PolarsResult<DataFrame> {
    let candidate = raw
        .get_column_names()
        .iter()
        .enumerate()
        .find(|(i, name)| is_date_like_name(name.as_str(), *i))
        .map(|(_, name)| name.to_string());
    let Some(column) = candidate else {
        return Err(PolarsError::NoData(
            "no date-like column to fall back to".into(),
        ));
    };
    canonicalize(with_date_column(raw, &column, false)?)
}

/// Rename `column` to `date` and parse it to Date dtype. Non-strict mode
/// coerces bad cells to null and drops those rows.
fn with_date_column(mut df: DataFrame, column: &str, strict: bool) -> PolarsResult<DataFrame> {
    if column != "date" {
        df.rename(column, "date".into())?;
    }
    let lf = df.lazy().with_column(col("date").str().to_date(StrptimeOptions {
        format: None,
        strict,
        exact: true,
        cache: true,
    }));
    let lf = if strict {
        lf
    } else {
        lf.drop_nulls(Some(vec![col("date")]))
    };
    lf.collect()
}

/// Best-effort date-column heuristic: an explicit date name, a blank
/// header, or an auto-generated one (`Unnamed: 0` from spreadsheet index
/// exports, `column_1` from headerless reads).
fn is_date_like_name(name: &str, position: usize) -> bool {
    let lower = name.to_lowercase();
    lower.contains("date")
        || name.is_empty()
        || name.starts_with("Unnamed")
        || lower == format!("column_{}", position + 1)
}

/// Sort ascending by date and keep the first occurrence of each date.
fn canonicalize(df: DataFrame) -> PolarsResult<DataFrame> {
    df.lazy()
        .sort(["date"], SortMultipleOptions::default().with_maintain_order(true))
        .unique_stable(Some(vec!["date".into()]), UniqueKeepStrategy::First)
        .collect()
}
