//! Shared test fixtures.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::table::DateTable;

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
}

/// Strictly parse an ISO `date` string column in place.
pub fn parse_dates(df: DataFrame) -> DataFrame {
    df.lazy()
        .with_column(col("date").str().to_date(StrptimeOptions {
            format: None,
            strict: true,
            exact: true,
            cache: true,
        }))
        .collect()
        .unwrap()
}

/// Five February rows with sentiment only.
pub fn feb_table() -> DateTable {
    let df = parse_dates(
        df!(
            "date" => &["2026-02-01", "2026-02-02", "2026-02-03", "2026-02-04", "2026-02-05"],
            "sentiment_mean" => &[0.2, 0.1, -0.05, 0.4, 0.0],
        )
        .unwrap(),
    );
    DateTable::new(df).unwrap()
}
