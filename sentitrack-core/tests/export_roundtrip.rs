//! Export/re-load round-trips and the documented February scenario.

use chrono::NaiveDate;
use sentitrack_core::coin::Coin;
use sentitrack_core::export;
use sentitrack_core::filter::RangeSelection;
use sentitrack_core::load::{self, Datasets};
use sentitrack_core::schema;
use sentitrack_core::stats;
use sentitrack_core::table::DateTable;
use sentitrack_core::view::{DashboardModel, Selections};
use tempfile::TempDir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
}

fn load_merged_from(contents: &str) -> DateTable {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(load::MERGED_FILE);
    std::fs::write(&path, contents).unwrap();
    load::load_dataset(&path, &schema::MERGED).unwrap()
}

fn assert_tables_equal(a: &DateTable, b: &DateTable) {
    assert_eq!(a.dates(), b.dates());
    assert_eq!(a.value_columns(), b.value_columns());
    for column in a.value_columns() {
        assert_eq!(
            a.numeric_column(&column),
            b.numeric_column(&column),
            "column {column} did not round-trip"
        );
    }
}

#[test]
fn export_reparses_to_the_same_table() {
    let merged = load_merged_from(
        "date,sentiment_mean,sentiment_mean_3d,btc_next_ret,eth_next_ret,sol_next_ret\n\
         2026-02-01,0.0734,,0.432958,-3.247899,-0.147059\n\
         2026-02-02,0.1017,,-0.674021,-2.063585,2.426843\n\
         2026-02-03,0.0666,0.0806,0.013215,5.095336,-3.132033\n\
         2026-02-04,-0.1047,0.091,2.994761,-1.163362,3.484995\n",
    );

    let exported = export::table_to_csv(&merged).unwrap();
    let reloaded = load_merged_from(&exported);
    assert_tables_equal(&merged, &reloaded);

    // Exporting the reload is byte-identical: a fixed point after one pass.
    assert_eq!(exported, export::table_to_csv(&reloaded).unwrap());
}

#[test]
fn shipped_dataset_round_trips() {
    let shipped = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../merged_sentiment_prices_final.csv"
    );
    let merged = load::load_dataset(shipped.as_ref(), &schema::MERGED).unwrap();
    assert!(!merged.is_empty());

    let exported = export::table_to_csv(&merged).unwrap();
    let reloaded = load_merged_from(&exported);
    assert_tables_equal(&merged, &reloaded);
}

#[test]
fn integral_floats_round_trip_through_integer_inference() {
    // `2` re-parses as an integer column; values still compare equal as f64.
    let merged = load_merged_from(
        "date,sentiment_mean,btc_next_ret\n\
         2026-02-01,0.5,2\n\
         2026-02-02,-0.25,7\n",
    );
    let exported = export::table_to_csv(&merged).unwrap();
    let reloaded = load_merged_from(&exported);
    assert_tables_equal(&merged, &reloaded);
}

#[test]
fn february_scenario_flows_into_the_model() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(load::SENTIMENT_FILE),
        "date,sentiment_mean\n\
         2026-02-01,0.2\n2026-02-02,0.1\n2026-02-03,-0.05\n2026-02-04,0.4\n2026-02-05,0.0\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(load::PRICES_FILE),
        "date,BTC\n\
         2026-02-01,52000.0\n2026-02-02,52624.0\n2026-02-03,52361.0\n2026-02-04,52518.1\n2026-02-05,53621.0\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(load::MERGED_FILE),
        "date,sentiment_mean,btc_next_ret\n\
         2026-02-01,0.2,1.2\n\
         2026-02-02,0.1,-0.5\n\
         2026-02-03,-0.05,0.3\n\
         2026-02-04,0.4,2.1\n\
         2026-02-05,0.0,-1.0\n",
    )
    .unwrap();

    let datasets: Datasets = load::load_all(dir.path()).unwrap();
    let selections = Selections {
        coin: Coin::Btc,
        range: RangeSelection::Full,
    };
    let model = DashboardModel::build(&datasets, &selections);

    assert_eq!(model.window, Some((day(1), day(5))));
    assert_eq!(
        model.returns,
        Some(vec![
            (day(1), 1.2),
            (day(2), -0.5),
            (day(3), 0.3),
            (day(4), 2.1),
            (day(5), -1.0),
        ])
    );
    assert_eq!(
        model.sentiment,
        vec![
            (day(1), 0.2),
            (day(2), 0.1),
            (day(3), -0.05),
            (day(4), 0.4),
            (day(5), 0.0),
        ]
    );
    // No smoothed column in this merged table; nothing breaks.
    assert_eq!(model.smoothed, None);

    // The correlation matrix carries sentiment_mean and btc_next_ret only,
    // derived from exactly those ten values.
    let matrix = &model.correlation;
    assert_eq!(matrix.columns, vec!["sentiment_mean", "btc_next_ret"]);
    let expected = stats::pearson(
        &[Some(0.2), Some(0.1), Some(-0.05), Some(0.4), Some(0.0)],
        &[Some(1.2), Some(-0.5), Some(0.3), Some(2.1), Some(-1.0)],
    )
    .map(stats::round3);
    assert_eq!(expected, Some(0.826));
    assert_eq!(matrix.values[0][1], Some(0.826));
    assert_eq!(matrix.values[1][0], Some(0.826));
    assert_eq!(matrix.values[0][0], Some(1.0));
}
