//! Contract-based validation for tic-tac-toe clicks.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::timeline::Timeline;
use super::Position;
use tracing::{debug, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Click Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the board at the current step has no winner.
///
/// A full board without a winner is caught by [`SquareIsEmpty`].
pub struct GameUndecided;

impl GameUndecided {
    /// Checks the current board for a winning line.
    #[instrument(skip(timeline))]
    pub fn check(timeline: &Timeline) -> Result<(), MoveError> {
        match timeline.status().winner() {
            Some(winner) => {
                debug!(%winner, "Board already decided");
                Err(MoveError::GameOver)
            }
            None => Ok(()),
        }
    }
}

/// Precondition: the clicked cell is empty at the current step.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks that `position` holds no mark.
    #[instrument(skip(timeline))]
    pub fn check(position: Position, timeline: &Timeline) -> Result<(), MoveError> {
        if timeline.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for accepted clicks.
///
/// Preconditions:
/// - Game not yet won at the current step
/// - Clicked square is empty
///
/// Postconditions:
/// - Entries up to the old step are unchanged and exactly one entry follows
/// - Timeline invariants hold
pub struct PlayContract;

impl Contract<Timeline, Position> for PlayContract {
    fn pre(timeline: &Timeline, position: &Position) -> Result<(), MoveError> {
        GameUndecided::check(timeline)?;
        SquareIsEmpty::check(*position, timeline)
    }

    fn post(before: &Timeline, after: &Timeline) -> Result<(), MoveError> {
        let kept = before.step() + 1;
        if after.len() != kept + 1 || after.entries()[..kept] != before.entries()[..kept] {
            warn!(
                before_len = before.len(),
                after_len = after.len(),
                "History prefix not preserved"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history prefix not preserved".to_string(),
            ));
        }

        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{HistoryEntry, Move, Player};

    #[test]
    fn test_precondition_empty_square() {
        let timeline = Timeline::new();
        assert!(PlayContract::pre(&timeline, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let timeline = Timeline::replay(&[Position::Center]).expect("valid replay");
        assert!(matches!(
            PlayContract::pre(&timeline, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_game_over() {
        let timeline = Timeline::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ])
        .expect("valid replay");
        assert_eq!(
            PlayContract::pre(&timeline, &Position::BottomRight),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_drawn_board_is_undecided_but_full() {
        let timeline = Timeline::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .expect("valid replay");

        assert!(GameUndecided::check(&timeline).is_ok());
        assert_eq!(
            PlayContract::pre(&timeline, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Timeline::new();
        let mut after = before.clone();
        after.play(Position::Center).expect("valid move");
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Timeline::new();
        let mut after = before.clone();
        after.play(Position::Center).expect("valid move");

        // Replace the new entry with one that was played by the wrong player
        after.entries[1] = HistoryEntry::initial().after(Move::new(Player::O, Position::Center));
        assert!(PlayContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_lost_prefix() {
        let before = Timeline::replay(&[Position::Center]).expect("valid replay");
        let mut after = before.clone();
        after.play(Position::TopLeft).expect("valid move");

        after.entries.remove(1);
        assert!(PlayContract::post(&before, &after).is_err());
    }
}
