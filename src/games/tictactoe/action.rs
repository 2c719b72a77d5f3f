//! First-class action types for tic-tac-toe.
//!
//! A move is a domain event: who placed a mark and where. History
//! entries carry the move that produced them.

use super::{Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error returned when a click or jump cannot be applied.
///
/// The interactive front end treats every variant except
/// `InvariantViolation` as a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the current step already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The requested history step does not exist.
    #[display("No history entry at step {}", _0)]
    UnknownStep(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
