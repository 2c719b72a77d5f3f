//! Alternating mark invariant: X, O, X, O, ... along the history.

use super::super::{Player, Timeline};
use super::Invariant;

/// Invariant: the move recorded at step *k* belongs to the player whose
/// turn it was at step *k-1*, so X plays odd entries and O even ones.
pub struct AlternatingMarkInvariant;

impl Invariant<Timeline> for AlternatingMarkInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| {
                entry
                    .last_move()
                    .is_some_and(|mov| mov.player == Player::for_step(step - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
