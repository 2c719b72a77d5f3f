//! Tic-tac-toe with a rewindable move history.
//!
//! # Architecture
//!
//! - **Games**: board, rules, and the [`Timeline`] of history entries
//! - **TUI**: ratatui front end with clickable cells and move list
//! - **Replay**: headless playback of a move list
//!
//! # Example
//!
//! ```
//! use tictac_rewind::{GameStatus, Player, Position, Timeline};
//!
//! let mut timeline = Timeline::new();
//! timeline.play(Position::Center).unwrap();
//! timeline.play(Position::TopLeft).unwrap();
//!
//! // Rewind to the first move and branch off
//! timeline.jump_to(1).unwrap();
//! timeline.play(Position::BottomRight).unwrap();
//!
//! assert_eq!(timeline.len(), 3);
//! assert_eq!(timeline.status(), GameStatus::InProgress { to_move: Player::X });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod labels;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Labels
pub use labels::Language;

// Crate-level exports - Replay
pub use replay::{replay_cells, transcript};

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, CellView, Direction, HitTarget, ScreenLayout, draw, map_event, move_cursor,
    run_tui,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingMarkInvariant, Board, Contract, GameStatus, GameUndecided, HistoryEntry, Invariant,
    InvariantSet, InvariantViolation, Move, MoveError, MoveLabel, PlayContract, Player, Position,
    PrefixChainInvariant, Square, SquareIsEmpty, StepInBoundsInvariant, Timeline,
    TimelineInvariants, rules,
};
