//! tictac_rewind - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictac_rewind::{GameConfig, replay_cells, run_tui, transcript};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(language) = cli.language {
        config = config.with_language(language);
    }

    match cli.command.unwrap_or(Command::Play {
        no_highlight: false,
    }) {
        Command::Play { no_highlight } => {
            if no_highlight {
                config = config.with_highlight_jumps(false);
            }
            run_tui(&config)
        }
        Command::Replay {
            cells,
            jump_to,
            json,
        } => run_replay(&config, &cells, jump_to, json),
    }
}

/// Plays the given cells headlessly and prints the result to stdout.
#[instrument(skip(config))]
fn run_replay(
    config: &GameConfig,
    cells: &[String],
    jump_to: Option<usize>,
    json: bool,
) -> Result<()> {
    // Logs go to stderr so stdout stays clean for the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(cells = cells.len(), "Replaying moves");
    let mut timeline = replay_cells(cells);

    if let Some(step) = jump_to
        && let Err(e) = timeline.jump_to(step)
    {
        warn!(step, error = %e, "Ignoring jump");
    }

    if json {
        let out =
            serde_json::to_string_pretty(&timeline).context("Failed to serialize timeline")?;
        println!("{}", out);
    } else {
        print!("{}", transcript(&timeline, *config.language()));
    }

    Ok(())
}
