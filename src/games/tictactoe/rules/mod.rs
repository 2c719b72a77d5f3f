//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. Nothing here knows about
//! history or whose turn it is beyond what the caller passes in.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use super::{Board, GameStatus, Player};
use tracing::instrument;

/// Derives the status of `board` when `to_move` is next.
#[instrument]
pub fn status(board: &Board, to_move: Player) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress { to_move }
    }
}
