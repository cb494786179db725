//! SentiTrack TUI — tabbed terminal dashboard for news sentiment vs coin returns.
//!
//! Tabs:
//! 1. Sentiment vs Returns — daily sentiment over next-day return bars
//! 2. Trend — raw vs 3-day smoothed sentiment
//! 3. Data & Insights — correlation matrix, latest rows, CSV export
//! 4. Help — keyboard shortcuts and file documentation

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::{App, Overlay, StatusLevel, Tab};
