//! CSV export of loaded tables.
//!
//! The merged-table export is the dashboard's only write path. Output uses
//! ISO dates, floats in shortest round-trip form, and blank cells for
//! nulls, so re-parsing the bytes under the primary loader strategy
//! reproduces the table exactly.

use std::path::Path;

use thiserror::Error;

use crate::table::DateTable;

/// Export filename for the merged table, matching the dashboard's download
/// artifact.
pub const EXPORT_FILE: &str = "merged_sentiment_prices.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv finalize failed: {0}")]
    Finalize(String),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

enum ColumnValues {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

/// Render a table as CSV text.
pub fn table_to_csv(table: &DateTable) -> Result<String, ExportError> {
    let columns = table.value_columns();
    let series: Vec<ColumnValues> = columns.iter().map(|c| column_values(table, c)).collect();

    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push("date".to_string());
    header.extend(columns.iter().cloned());
    wtr.write_record(&header)?;

    for (i, date) in table.dates().iter().enumerate() {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(date.to_string());
        for values in &series {
            record.push(cell(values, i));
        }
        wtr.write_record(&record)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Finalize(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Finalize(e.to_string()))
}

/// Write `table` to `path` as CSV.
pub fn save_csv(table: &DateTable, path: &Path) -> Result<(), ExportError> {
    let data = table_to_csv(table)?;
    std::fs::write(path, data)?;
    Ok(())
}

fn column_values(table: &DateTable, name: &str) -> ColumnValues {
    if let Some(values) = table.numeric_column(name) {
        return ColumnValues::Numeric(values);
    }
    let text = table
        .frame()
        .column(name)
        .ok()
        .and_then(|c| c.str().ok().map(|ca| ca.iter().map(|v| v.map(str::to_string)).collect()))
        .unwrap_or_default();
    ColumnValues::Text(text)
}

fn cell(values: &ColumnValues, row: usize) -> String {
    match values {
        // `{}` prints the shortest representation that round-trips.
        ColumnValues::Numeric(v) => match v.get(row).copied().flatten() {
            Some(value) => format!("{value}"),
            None => String::new(),
        },
        ColumnValues::Text(v) => v.get(row).cloned().flatten().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use super::*;
    use crate::table::DateTable;
    use crate::test_util::parse_dates;

    fn merged_table() -> DateTable {
        DateTable::new(parse_dates(
            df!(
                "date" => &["2026-02-01", "2026-02-02", "2026-02-03"],
                "sentiment_mean" => &[0.2, 0.1, -0.05],
                "sentiment_mean_3d" => &[None, None, Some(0.083)],
                "btc_next_ret" => &[1.2, -0.5, 0.432958],
            )
            .unwrap(),
        ))
        .unwrap()
    }

    #[test]
    fn header_and_rows() {
        let csv = table_to_csv(&merged_table()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("date,sentiment_mean,sentiment_mean_3d,btc_next_ret")
        );
        assert_eq!(lines.next(), Some("2026-02-01,0.2,,1.2"));
        assert_eq!(lines.next(), Some("2026-02-02,0.1,,-0.5"));
        assert_eq!(lines.next(), Some("2026-02-03,-0.05,0.083,0.432958"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_table_exports_header_only() {
        let t = merged_table();
        let empty = t.slice_range(
            chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
        );
        let csv = table_to_csv(&empty).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn text_columns_survive_export() {
        let t = DateTable::new(parse_dates(
            df!(
                "date" => &["2026-02-01"],
                "sentiment_mean" => &[0.2],
                "top_headline" => &["btc soars"],
            )
            .unwrap(),
        ))
        .unwrap();
        let csv = table_to_csv(&t).unwrap();
        assert!(csv.lines().nth(1).unwrap().ends_with("btc soars"));
    }

    #[test]
    fn save_csv_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE);
        save_csv(&merged_table(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("date,"));
        assert_eq!(written.lines().count(), 4);
    }
}
