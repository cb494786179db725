//! Expected column layout for the three input datasets.
//!
//! Each dataset declares required and optional numeric columns explicitly.
//! A missing required column is a load failure; a missing optional column
//! means the chart trace or correlation entry that would use it is skipped.

use polars::prelude::*;

/// Column requirements for one dataset.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    /// Logical dataset name used in error messages.
    pub name: &'static str,
    /// Columns that must be present and numeric.
    pub required: &'static [&'static str],
    /// Columns that are numeric when present, skipped when absent.
    pub optional: &'static [&'static str],
}

/// Daily news sentiment scores.
pub const SENTIMENT: TableSchema = TableSchema {
    name: "sentiment",
    required: &["sentiment_mean"],
    optional: &["sentiment_mean_3d"],
};

/// Daily closes per coin. All coins optional so a reduced universe loads.
pub const PRICES: TableSchema = TableSchema {
    name: "prices",
    required: &[],
    optional: &["BTC", "ETH", "SOL"],
};

/// Merged sentiment/price table, the one the dashboard visualizes.
pub const MERGED: TableSchema = TableSchema {
    name: "merged",
    required: &["sentiment_mean"],
    optional: &["sentiment_mean_3d", "btc_next_ret", "eth_next_ret", "sol_next_ret"],
};

impl TableSchema {
    /// Validate a canonicalized frame: `date` column of Date dtype, required
    /// columns present and numeric, optional columns numeric when present.
    /// Columns outside the schema are ignored.
    pub fn validate(&self, df: &DataFrame) -> Result<(), SchemaError> {
        let actual = df.schema();

        match actual.get("date") {
            None => return Err(SchemaError::MissingColumn("date".to_string())),
            Some(DataType::Date) => {}
            Some(dtype) => return Err(SchemaError::BadDateColumn { dtype: dtype.clone() }),
        }

        for column in self.required {
            match actual.get(column) {
                None => return Err(SchemaError::MissingColumn(column.to_string())),
                Some(dtype) if !is_numeric(dtype) => {
                    return Err(SchemaError::NotNumeric {
                        column: column.to_string(),
                        dtype: dtype.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        for column in self.optional {
            if let Some(dtype) = actual.get(column) {
                if !is_numeric(dtype) {
                    return Err(SchemaError::NotNumeric {
                        column: column.to_string(),
                        dtype: dtype.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

pub(crate) fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8
    )
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("column '{column}' must be numeric, got {dtype}")]
    NotNumeric { column: String, dtype: DataType },

    #[error("column 'date' must have Date dtype, got {dtype}")]
    BadDateColumn { dtype: DataType },

    #[error("column 'date' contains {0} null value(s)")]
    NullDates(usize),

    #[error("date index is not strictly ascending")]
    UnsortedDates,
}
