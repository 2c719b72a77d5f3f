//! Command-line interface for tictac_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_rewind::Language;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictac_rewind")]
#[command(about = "Terminal tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "tictac_rewind.toml")]
    pub config: PathBuf,

    /// Label language, overriding the config file
    #[arg(short, long, global = true, value_enum)]
    pub language: Option<Language>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (mouse or keyboard)
    Play {
        /// Disable highlighting of the cell and row selected by a jump
        #[arg(long)]
        no_highlight: bool,
    },

    /// Play a list of cells without a UI and print the result
    Replay {
        /// Cells in play order: numbers 1-9 (row-major) or labels like "center"
        #[arg(required = true)]
        cells: Vec<String>,

        /// Jump to this step after playing, before printing
        #[arg(long)]
        jump_to: Option<usize>,

        /// Print the timeline as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
