//! Headless replay: play a list of cells and print the resulting game.

use crate::games::tictactoe::{Position, Timeline};
use crate::labels::Language;
use tracing::{instrument, warn};

/// Plays `cells` (1-based numbers or position labels) on a fresh timeline.
///
/// Cells that cannot be parsed or played are skipped with a warning,
/// the same way the interactive board ignores invalid clicks.
#[instrument]
pub fn replay_cells<S: AsRef<str> + std::fmt::Debug>(cells: &[S]) -> Timeline {
    let mut timeline = Timeline::new();
    for cell in cells {
        let cell = cell.as_ref();
        let Some(pos) = Position::parse_cell(cell) else {
            warn!(cell, "Skipping unknown cell");
            continue;
        };
        if let Err(e) = timeline.play(pos) {
            warn!(cell, error = %e, "Skipping rejected move");
        }
    }
    timeline
}

/// Board, status line and numbered move list as plain text.
pub fn transcript(timeline: &Timeline, language: Language) -> String {
    let mut out = timeline.board().display();
    out.push_str("\n\n");
    out.push_str(&language.status_line(&timeline.status()));
    out.push_str("\n\n");

    for (step, label) in timeline.labels().iter().enumerate() {
        let marker = if step == timeline.step() { '>' } else { ' ' };
        out.push_str(&format!(
            "{}{}. {}\n",
            marker,
            step + 1,
            language.move_label(label)
        ));
    }
    out
}
