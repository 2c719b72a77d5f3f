//! Tic-tac-toe with a rewindable move history.

mod action;
mod contracts;
mod history;
mod invariants;
mod notation;
mod position;
pub mod rules;
mod timeline;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameUndecided, PlayContract, SquareIsEmpty};
pub use history::HistoryEntry;
pub use invariants::{
    AlternatingMarkInvariant, Invariant, InvariantSet, InvariantViolation, PrefixChainInvariant,
    StepInBoundsInvariant, TimelineInvariants,
};
pub use notation::MoveLabel;
pub use position::Position;
pub use timeline::Timeline;
pub use types::{Board, GameStatus, Player, Square};
