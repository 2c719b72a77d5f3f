//! Move-list annotation: which move a history entry is and where it was played.

use super::history::HistoryEntry;
use serde::{Deserialize, Serialize};

/// Annotation for one history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveLabel {
    /// Step 0, the empty board.
    GameStart,
    /// A played move.
    Move {
        /// Move number (equal to the step).
        number: usize,
        /// 1-based column of the cell played.
        column: usize,
        /// 1-based row of the cell played.
        row: usize,
    },
}

impl MoveLabel {
    /// Annotates the entry found at `step`.
    pub fn for_entry(step: usize, entry: &HistoryEntry) -> Self {
        match entry.position() {
            Some(pos) if step > 0 => MoveLabel::Move {
                number: step,
                column: pos.column(),
                row: pos.row(),
            },
            _ => MoveLabel::GameStart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Player, Position};

    #[test]
    fn test_initial_entry_is_game_start() {
        assert_eq!(
            MoveLabel::for_entry(0, &HistoryEntry::initial()),
            MoveLabel::GameStart
        );
    }

    #[test]
    fn test_move_reports_column_then_row() {
        let entry = HistoryEntry::initial().after(Move::new(Player::X, Position::MiddleRight));
        assert_eq!(
            MoveLabel::for_entry(1, &entry),
            MoveLabel::Move {
                number: 1,
                column: 3,
                row: 2
            }
        );
    }
}
