//! Where clickable elements were drawn in the last frame.

use crate::games::tictactoe::Position;
use ratatui::layout::{Position as ScreenPosition, Rect};

/// Element under a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A board cell.
    Cell(Position),
    /// A move-list row, by history step.
    Move(usize),
}

/// Screen areas of the board cells and move-list rows.
///
/// Rebuilt on every draw so clicks always match what is on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    cells: [Rect; 9],
    moves: Vec<Rect>,
}

impl ScreenLayout {
    /// Records cell areas (row-major) and move rows (by step).
    pub fn new(cells: [Rect; 9], moves: Vec<Rect>) -> Self {
        Self { cells, moves }
    }

    /// Area of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Area of the move-list row for `step`, if it was drawn.
    pub fn move_row(&self, step: usize) -> Option<Rect> {
        self.moves.get(step).copied()
    }

    /// Finds the element at a screen coordinate.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let point = ScreenPosition::new(column, row);

        if let Some(pos) = Position::ALL
            .iter()
            .copied()
            .find(|pos| self.cell(*pos).contains(point))
        {
            return Some(HitTarget::Cell(pos));
        }

        self.moves
            .iter()
            .position(|rect| rect.contains(point))
            .map(HitTarget::Move)
    }
}
