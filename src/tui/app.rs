//! Application state and logic.

use crate::config::GameConfig;
use crate::games::tictactoe::{MoveError, Position, Timeline};
use crate::labels::Language;
use tracing::{debug, info, instrument};

use super::input::{Action, move_cursor};
use super::layout::{HitTarget, ScreenLayout};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    timeline: Timeline,
    cursor: Position,
    language: Language,
    highlight_jumps: bool,
    layout: ScreenLayout,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            timeline: Timeline::new(),
            cursor: Position::Center,
            language: *config.language(),
            highlight_jumps: *config.highlight_jumps(),
            layout: ScreenLayout::default(),
            should_quit: false,
        }
    }

    /// The game timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Label language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Layout recorded by the last draw.
    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Stores the layout of the frame just drawn.
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = layout;
    }

    /// Cell to highlight after a jump, if highlighting is enabled.
    pub fn highlighted_cell(&self) -> Option<Position> {
        self.highlight_jumps
            .then(|| self.timeline.highlighted_position())
            .flatten()
    }

    /// Move-list row to highlight after a jump, if highlighting is enabled.
    pub fn highlighted_move(&self) -> Option<usize> {
        self.highlight_jumps
            .then(|| self.timeline.highlighted_step())
            .flatten()
    }

    /// Status line for the current step.
    pub fn status_line(&self) -> String {
        self.language.status_line(&self.timeline.status())
    }

    /// Text of every move-list row, oldest first.
    pub fn move_lines(&self) -> Vec<String> {
        self.timeline
            .labels()
            .iter()
            .map(|label| self.language.move_label(label))
            .collect()
    }

    /// Applies one action. Rejected moves and jumps leave state unchanged.
    #[instrument(skip(self), fields(step = self.timeline.step()))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Restart => self.restart(),
            Action::Cursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Action::PlayAtCursor => self.play(self.cursor),
            Action::PlayCell(pos) => self.play(pos),
            Action::StepBack => {
                let result = self.timeline.step_back();
                ignore_rejected(result);
            }
            Action::StepForward => {
                let result = self.timeline.step_forward();
                ignore_rejected(result);
            }
            Action::JumpToStart => {
                let result = self.timeline.jump_to(0);
                ignore_rejected(result);
            }
            Action::JumpToLatest => {
                let result = self.timeline.jump_to_latest();
                ignore_rejected(result);
            }
            Action::Click { column, row } => match self.layout.hit_test(column, row) {
                Some(HitTarget::Cell(pos)) => self.play(pos),
                Some(HitTarget::Move(step)) => {
                    let result = self.timeline.jump_to(step);
                    ignore_rejected(result);
                }
                None => debug!(column, row, "Click outside clickable elements"),
            },
        }
    }

    fn play(&mut self, pos: Position) {
        match self.timeline.play(pos) {
            Ok(_) => self.cursor = pos,
            Err(e) => debug!(error = %e, position = %pos, "Ignoring click"),
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.timeline = Timeline::new();
        self.cursor = Position::Center;
    }
}

fn ignore_rejected(result: Result<(), MoveError>) {
    if let Err(e) = result {
        debug!(error = %e, "Ignoring jump");
    }
}
