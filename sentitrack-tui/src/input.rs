//! Keyboard input dispatch — overlay → global keys → tab-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Overlay, Tab};

/// Handle a key event.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The welcome overlay consumes its dismissing key.
    if app.overlay == Overlay::Welcome {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_tab = Tab::Overview; return; }
        KeyCode::Char('2') => { app.active_tab = Tab::Trend; return; }
        KeyCode::Char('3') => { app.active_tab = Tab::Insights; return; }
        KeyCode::Char('4') => { app.active_tab = Tab::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_tab = app.active_tab.prev();
            } else {
                app.active_tab = app.active_tab.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_tab = app.active_tab.prev();
            return;
        }
        _ => {}
    }

    // 3. Tab-specific keys.
    match app.active_tab {
        Tab::Overview | Tab::Trend => handle_range_key(app, key),
        Tab::Insights => {
            if let KeyCode::Char('x') = key.code {
                app.export_merged();
            } else {
                handle_range_key(app, key);
            }
        }
        Tab::Help => {}
    }
}

/// Coin and date-range controls shared by the three data tabs.
fn handle_range_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') => app.cycle_coin(true),
        KeyCode::Char('C') => app.cycle_coin(false),
        KeyCode::Char('h') => app.step_start(-1),
        KeyCode::Char('l') => app.step_start(1),
        KeyCode::Char('H') => app.step_start(-7),
        KeyCode::Char('L') => app.step_start(7),
        KeyCode::Char('j') => app.step_end(-1),
        KeyCode::Char('k') => app.step_end(1),
        KeyCode::Char('J') => app.step_end(-7),
        KeyCode::Char('K') => app.step_end(7),
        KeyCode::Char('r') => app.reset_range(),
        _ => {}
    }
}
