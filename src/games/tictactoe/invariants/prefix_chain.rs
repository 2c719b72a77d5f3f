//! Prefix chain invariant: each entry adds exactly one mark to the previous one.

use super::super::{HistoryEntry, Timeline};
use super::Invariant;

/// Invariant: history entries form a strictly increasing prefix sequence.
///
/// Entry 0 is the empty board. Entry *k* equals entry *k-1* plus the mark
/// recorded in its move, and that cell was empty in entry *k-1*.
pub struct PrefixChainInvariant;

impl Invariant<Timeline> for PrefixChainInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let Some(first) = timeline.entries().first() else {
            return false;
        };
        if *first != HistoryEntry::initial() {
            return false;
        }

        timeline.entries().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            match next.last_move() {
                Some(mov) => {
                    prev.board().is_empty(mov.position)
                        && *next.board() == prev.board().with_mark(mov.position, mov.player)
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly its recorded mark to the previous board"
    }
}
