//! Criterion benchmarks for the dashboard hot paths.
//!
//! Benchmarks:
//! 1. Render-model build (runs on every key press)
//! 2. Date-range slicing
//! 3. Correlation matrix over the full merged table

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polars::prelude::*;

use sentitrack_core::coin::Coin;
use sentitrack_core::filter::RangeSelection;
use sentitrack_core::load::Datasets;
use sentitrack_core::stats::{correlation_matrix, CORRELATION_COLUMNS};
use sentitrack_core::table::DateTable;
use sentitrack_core::view::{DashboardModel, Selections};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_merged(n: usize) -> DateTable {
    let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let dates: Vec<String> = (0..n)
        .map(|i| (base + chrono::Duration::days(i as i64)).to_string())
        .collect();
    let sentiment: Vec<f64> = (0..n).map(|i| (i as f64 * 0.07).sin() * 0.4).collect();
    let smoothed: Vec<f64> = (0..n).map(|i| (i as f64 * 0.07).sin() * 0.35).collect();
    let btc: Vec<f64> = (0..n).map(|i| (i as f64 * 0.11).cos() * 2.5).collect();
    let eth: Vec<f64> = (0..n).map(|i| (i as f64 * 0.13).sin() * 3.0).collect();
    let sol: Vec<f64> = (0..n).map(|i| (i as f64 * 0.17).cos() * 4.0).collect();

    let df = df!(
        "date" => dates,
        "sentiment_mean" => sentiment,
        "sentiment_mean_3d" => smoothed,
        "btc_next_ret" => btc,
        "eth_next_ret" => eth,
        "sol_next_ret" => sol,
    )
    .unwrap()
    .lazy()
    .with_column(col("date").str().to_date(StrptimeOptions {
        format: None,
        strict: true,
        exact: true,
        cache: true,
    }))
    .collect()
    .unwrap();
    DateTable::new(df).unwrap()
}

fn make_datasets(n: usize) -> Datasets {
    let merged = make_merged(n);
    Datasets {
        sentiment: merged.clone(),
        prices: merged.clone(),
        merged,
    }
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_model_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_build");
    for n in [30usize, 365, 3650] {
        let datasets = make_datasets(n);
        let selections = Selections {
            coin: Coin::Btc,
            range: RangeSelection::Full,
        };
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(DashboardModel::build(&datasets, &selections)))
        });
    }
    group.finish();
}

fn bench_slice_range(c: &mut Criterion) {
    let merged = make_merged(3650);
    let start = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
    c.bench_function("slice_range_year_of_3650", |b| {
        b.iter(|| black_box(merged.slice_range(black_box(start), black_box(end))))
    });
}

fn bench_correlation(c: &mut Criterion) {
    let merged = make_merged(3650);
    c.bench_function("correlation_matrix_3650", |b| {
        b.iter(|| black_box(correlation_matrix(&merged, &CORRELATION_COLUMNS)))
    });
}

criterion_group!(benches, bench_model_build, bench_slice_range, bench_correlation);
criterion_main!(benches);
