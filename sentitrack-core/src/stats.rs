//! Correlation statistics — pure functions over numeric columns.
//!
//! Observations are pairwise complete: an (x, y) pair participates only when
//! both values are present. Degenerate inputs (fewer than two pairs, zero
//! variance) yield None rather than NaN.

use crate::table::DateTable;

/// Column set the insights panel correlates, in display order. Columns
/// absent from the merged table are skipped.
pub const CORRELATION_COLUMNS: [&str; 5] = [
    "sentiment_mean",
    "sentiment_mean_3d",
    "btc_next_ret",
    "eth_next_ret",
    "sol_next_ret",
];

/// Pairwise Pearson coefficients, rounded to 3 decimals. `values[i][j]`
/// correlates `columns[i]` with `columns[j]`; degenerate cells are None.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// ─── Statistics ─────────────────────────────────────────────────────

/// Pearson correlation coefficient over pairwise-complete observations.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let mut n = 0.0_f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    let mut sum_xy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1.0;
            sum_x += x;
            sum_y += y;
            sum_xx += x * x;
            sum_yy += y * y;
            sum_xy += x * y;
        }
    }
    if n < 2.0 {
        return None;
    }
    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_xx - sum_x * sum_x) * (n * sum_yy - sum_y * sum_y)).sqrt();
    if denominator < 1e-9 {
        return None;
    }
    Some(numerator / denominator)
}

/// Round to 3 decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Correlation matrix over `requested` columns restricted to those present
/// in `table`, values rounded to 3 decimals.
pub fn correlation_matrix(table: &DateTable, requested: &[&str]) -> CorrelationMatrix {
    let columns: Vec<String> = requested
        .iter()
        .filter(|c| table.has_column(c))
        .map(|c| c.to_string())
        .collect();
    let series: Vec<Vec<Option<f64>>> = columns
        .iter()
        .map(|c| table.numeric_column(c).unwrap_or_default())
        .collect();
    let values = (0..columns.len())
        .map(|i| {
            (0..columns.len())
                .map(|j| pearson(&series[i], &series[j]).map(round3))
                .collect()
        })
        .collect();
    CorrelationMatrix { columns, values }
}
