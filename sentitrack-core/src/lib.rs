//! SentiTrack Core — data layer for the sentiment dashboard.
//!
//! Loads three pre-computed CSV datasets (daily news sentiment, daily coin
//! prices, and a merged sentiment/price table) into immutable date-indexed
//! tables, and derives everything the dashboard renders:
//! - Two-stage date-index parsing with a lenient fallback
//! - Closed-interval date filtering and coin selection
//! - Pairwise-complete Pearson correlation over a fixed column set
//! - Tail snapshots and round-trippable CSV export

pub mod coin;
pub mod export;
pub mod filter;
pub mod load;
pub mod schema;
pub mod stats;
pub mod table;
pub mod view;

pub use coin::Coin;
pub use filter::{filter_range, RangeSelection};
pub use load::{load_all, Datasets, LoadError};
pub use table::DateTable;
pub use view::{DashboardModel, Selections};

#[cfg(test)]
pub(crate) mod test_util;
