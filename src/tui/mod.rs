//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod layout;
mod ui;

pub use app::App;
pub use input::{Action, Direction, map_event, move_cursor};
pub use layout::{HitTarget, ScreenLayout};
pub use ui::{CellView, draw};

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use ratatui::DefaultTerminal;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the interactive game until the player quits.
///
/// The terminal is restored on every exit path: normal quit, error or panic.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    init_file_logging(config)?;

    info!("Starting tic-tac-toe TUI");

    // Armed before setup so a half-finished setup is undone as well
    let guard = TerminalGuard;
    let mut terminal = ratatui::try_init()?;
    execute!(io::stdout(), EnableMouseCapture)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.timeline().len() - 1, "TUI closed");

    res
}

/// Draw, wait for input, apply it; repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let mut layout = ScreenLayout::default();
        let view: &App = app;
        terminal.draw(|f| layout = ui::draw(f, view))?;
        app.set_layout(layout);

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            if let Some(action) = map_event(&event) {
                debug!(?action, "Handling action");
                app.handle(action);
            }
        }
    }
    Ok(())
}

/// Restores the terminal when dropped, including during a panic unwind.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal(&mut io::stdout()) {
            error!(error = ?err, "Failed to restore terminal");
        }
    }
}

/// Runs every restore step, even after an earlier one fails.
///
/// Returns the first error encountered.
fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    let mouse = execute!(out, DisableMouseCapture);
    let screen = execute!(out, LeaveAlternateScreen);
    let raw = disable_raw_mode();
    mouse.and(screen).and(raw)
}

/// Sends logs to the configured file so they do not draw over the board.
fn init_file_logging(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
