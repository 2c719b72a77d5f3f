//! History entries: one board snapshot per step.

use super::action::Move;
use super::{Board, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A board snapshot together with the move that produced it.
///
/// The entry for step 0 is the empty board and carries no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// The empty-board entry every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Derives the entry that follows `self` when `mov` is played.
    pub fn after(&self, mov: Move) -> Self {
        Self {
            board: self.board.with_mark(mov.position, mov.player),
            last_move: Some(mov),
        }
    }

    /// Position of the move that produced this entry.
    pub fn position(&self) -> Option<Position> {
        self.last_move.map(|m| m.position)
    }
}

impl Default for HistoryEntry {
    fn default() -> Self {
        Self::initial()
    }
}
