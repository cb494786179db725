//! SentiTrack — crypto news sentiment dashboard for the terminal.
//!
//! Reads three pre-computed CSVs from the working directory and serves four
//! tabs: sentiment vs next-day returns, the sentiment trend, a correlation /
//! latest-rows summary with CSV export, and help.

use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use sentitrack_tui::app::App;
use sentitrack_tui::{input, persistence, ui};

fn main() -> Result<()> {
    // All three CSVs load before the terminal switches modes, so a bad file
    // fails fast with a readable message instead of a garbled screen.
    let datasets = sentitrack_core::load_all(Path::new("."))
        .context("loading input CSVs from the working directory")?;

    let state_path = state_file();
    let mut app = App::new(datasets);
    // apply() re-clamps the stored range against the loaded span.
    persistence::apply(&mut app, persistence::load(&state_path));

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);

    // Save the last-viewed selections even when the loop errored.
    let _ = persistence::save(&state_path, &persistence::extract(&app));

    restore_terminal(&mut terminal)?;
    result
}

/// Draw, then wait up to 50ms for a key (~20 FPS tick), until quit.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }
    }
    Ok(())
}

fn state_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sentitrack")
        .join("state.json")
}

/// Raw mode + alternate screen, with a panic hook that undoes both first.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
