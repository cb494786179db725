//! UI state persistence — JSON save/load across restarts.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sentitrack_core::{Coin, RangeSelection};

use crate::app::{App, Overlay, Tab};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_tab: Tab,
    pub coin: Coin,
    /// Range endpoints; both None means the full span.
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Overview,
            coin: Coin::Btc,
            start: None,
            end: None,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from the app.
pub fn extract(app: &App) -> PersistedState {
    let (start, end) = match app.selections.range {
        RangeSelection::Between(s, e) => (Some(s), Some(e)),
        _ => (None, None),
    };
    PersistedState {
        active_tab: app.active_tab,
        coin: app.selections.coin,
        start,
        end,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to the app. The stored range is re-clamped against
/// the freshly loaded data span, so stale state cannot produce an
/// out-of-bounds view.
pub fn apply(app: &mut App, state: PersistedState) {
    app.active_tab = state.active_tab;
    app.selections.coin = state.coin;
    app.selections.range = match (state.start, state.end, app.datasets.merged.span()) {
        (Some(s), Some(e), Some((min, max))) if s <= e && s <= max && e >= min => {
            let end = e.clamp(min, max);
            RangeSelection::Between(s.clamp(min, end), end)
        }
        _ => RangeSelection::Full,
    };
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
    app.refresh_model();
}
