//! Maps terminal events to game actions.

use crate::games::tictactoe::Position;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::trace;

/// Direction for keyboard cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the game.
    Quit,
    /// Start a fresh game.
    Restart,
    /// Move the board cursor.
    Cursor(Direction),
    /// Play at the cursor.
    PlayAtCursor,
    /// Play at a specific cell.
    PlayCell(Position),
    /// Jump one step back in history.
    StepBack,
    /// Jump one step forward in history.
    StepForward,
    /// Jump to the empty board.
    JumpToStart,
    /// Jump to the newest entry.
    JumpToLatest,
    /// Left mouse button pressed at a screen coordinate.
    Click {
        /// Screen column.
        column: u16,
        /// Screen row.
        row: u16,
    },
}

/// Translates a crossterm event, ignoring anything without a binding.
pub fn map_event(event: &Event) -> Option<Action> {
    let action = match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    };
    trace!(?event, ?action, "Mapped terminal event");
    action
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Up => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right => Some(Action::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayAtCursor),
        KeyCode::Char('[') => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Home => Some(Action::JumpToStart),
        KeyCode::End => Some(Action::JumpToLatest),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| Position::from_cell_number(digit as usize))
            .map(Action::PlayCell),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Moves cursor one cell in `direction`, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, column) = (cursor.row() - 1, cursor.column() - 1);
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, column)),
        Direction::Down => Some((row + 1, column)),
        Direction::Left => column.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, column + 1)),
    };

    target
        .and_then(|(r, c)| Position::from_row_column(r, c))
        .unwrap_or(cursor)
}
