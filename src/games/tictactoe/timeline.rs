//! Move history with time travel.
//!
//! The timeline holds one [`HistoryEntry`] per step and a pointer to the
//! step currently shown. Jumping moves the pointer without touching the
//! entries; playing from a rewound step discards every entry after it
//! before appending the new one.
//!
//! Whose turn it is follows from the step pointer alone (X on even steps),
//! so there is no separate turn flag to keep in sync.

use super::action::{Move, MoveError};
use super::contracts::{Contract, PlayContract};
use super::history::HistoryEntry;
use super::notation::MoveLabel;
use super::{Board, GameStatus, Player, Position, rules};
use serde::Serialize;
use tracing::{debug, instrument};

/// Full game state: history entries, current step and jump highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub(super) entries: Vec<HistoryEntry>,
    pub(super) step: usize,
    pub(super) highlighted: Option<usize>,
}

impl Timeline {
    /// Creates a fresh game with a single empty-board entry.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
            step: 0,
            highlighted: None,
        }
    }

    /// Plays `positions` in order from a fresh game, stopping at the first rejected one.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut timeline = Self::new();
        for pos in positions {
            timeline.play(*pos)?;
        }
        Ok(timeline)
    }

    /// All history entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of history entries (always at least one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a timeline keeps its initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step currently shown.
    pub fn step(&self) -> usize {
        self.step
    }

    /// True when the current step is the newest entry.
    pub fn is_latest(&self) -> bool {
        self.step + 1 == self.entries.len()
    }

    /// Entry at the current step.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.step]
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player whose turn it is at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Status of the board at the current step.
    pub fn status(&self) -> GameStatus {
        rules::status(self.board(), self.to_move())
    }

    /// Step selected by the last jump, cleared by the next move.
    pub fn highlighted_step(&self) -> Option<usize> {
        self.highlighted
    }

    /// Cell played by the highlighted entry, if it has one.
    pub fn highlighted_position(&self) -> Option<Position> {
        self.highlighted
            .and_then(|step| self.entries.get(step))
            .and_then(HistoryEntry::position)
    }

    /// Annotations for every entry, oldest first.
    pub fn labels(&self) -> Vec<MoveLabel> {
        self.entries
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveLabel::for_entry(step, entry))
            .collect()
    }

    /// Places the current player's mark at `position`.
    ///
    /// Any entries after the current step are discarded first. On error
    /// the timeline is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board already has a winner.
    /// - [`MoveError::SquareOccupied`] if the cell holds a mark.
    /// - [`MoveError::InvariantViolation`] if the history was already
    ///   inconsistent (checked in debug builds only).
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn play(&mut self, position: Position) -> Result<&HistoryEntry, MoveError> {
        PlayContract::pre(self, &position)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let next = self.current().after(Move::new(self.to_move(), position));
        let discarded = self.entries.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding entries after current step");
        }
        self.entries.truncate(self.step + 1);
        self.entries.push(next);
        self.step = self.entries.len() - 1;
        self.highlighted = None;

        #[cfg(debug_assertions)]
        if let Err(e) = PlayContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        debug!(new_step = self.step, "Move recorded");
        Ok(self.current())
    }

    /// Rewinds (or fast-forwards) to `step` and highlights it.
    ///
    /// # Errors
    ///
    /// [`MoveError::UnknownStep`] if no entry exists at `step`.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.entries.len() {
            return Err(MoveError::UnknownStep(step));
        }
        self.step = step;
        self.highlighted = Some(step);
        debug!(to_move = %self.to_move(), "Jumped");
        Ok(())
    }

    /// Jumps one step back.
    pub fn step_back(&mut self) -> Result<(), MoveError> {
        match self.step.checked_sub(1) {
            Some(step) => self.jump_to(step),
            None => Err(MoveError::UnknownStep(0)),
        }
    }

    /// Jumps one step forward.
    pub fn step_forward(&mut self) -> Result<(), MoveError> {
        self.jump_to(self.step + 1)
    }

    /// Jumps to the newest entry.
    pub fn jump_to_latest(&mut self) -> Result<(), MoveError> {
        self.jump_to(self.entries.len() - 1)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
