//! Tests for the rewindable move history.

use tictac_rewind::{GameStatus, MoveError, MoveLabel, Player, Position, Square, Timeline};

#[test]
fn test_players_alternate_starting_with_x() {
    let mut timeline = Timeline::new();
    assert_eq!(timeline.to_move(), Player::X);

    timeline.play(Position::Center).unwrap();
    assert_eq!(timeline.to_move(), Player::O);
    assert_eq!(
        timeline.board().get(Position::Center),
        Square::Occupied(Player::X)
    );

    timeline.play(Position::TopLeft).unwrap();
    assert_eq!(timeline.to_move(), Player::X);
    assert_eq!(
        timeline.board().get(Position::TopLeft),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_turn_follows_jumped_step() {
    let mut timeline =
        Timeline::replay(&[Position::Center, Position::TopLeft, Position::TopRight]).unwrap();
    assert_eq!(timeline.to_move(), Player::O);

    timeline.jump_to(2).unwrap();
    assert_eq!(timeline.to_move(), Player::X);
    timeline.jump_to(1).unwrap();
    assert_eq!(timeline.to_move(), Player::O);
    timeline.jump_to(0).unwrap();
    assert_eq!(timeline.to_move(), Player::X);
}

#[test]
fn test_jump_keeps_future_entries() {
    let mut timeline =
        Timeline::replay(&[Position::Center, Position::TopLeft, Position::TopRight]).unwrap();
    timeline.jump_to(1).unwrap();

    assert_eq!(timeline.len(), 4);
    assert_eq!(timeline.step(), 1);
    assert!(!timeline.is_latest());
    assert!(timeline.board().is_empty(Position::TopLeft));
}

#[test]
fn test_play_after_jump_discards_future() {
    let mut timeline =
        Timeline::replay(&[Position::Center, Position::TopLeft, Position::TopRight]).unwrap();
    timeline.jump_to(1).unwrap();
    timeline.play(Position::BottomRight).unwrap();

    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline.step(), 2);
    assert!(timeline.is_latest());

    let board = timeline.board();
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
    assert!(board.is_empty(Position::TopLeft));
    assert!(board.is_empty(Position::TopRight));
}

#[test]
fn test_play_from_start_restarts_history() {
    let mut timeline = Timeline::replay(&[Position::Center, Position::TopLeft]).unwrap();
    timeline.jump_to(0).unwrap();
    timeline.play(Position::BottomLeft).unwrap();

    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.board().occupied(), 1);
    assert_eq!(
        timeline.board().get(Position::BottomLeft),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_occupied_square_changes_nothing() {
    let mut timeline = Timeline::replay(&[Position::Center]).unwrap();
    let before = timeline.clone();

    assert_eq!(
        timeline.play(Position::Center).unwrap_err(),
        MoveError::SquareOccupied(Position::Center)
    );
    assert_eq!(timeline, before);
}

#[test]
fn test_won_game_changes_nothing() {
    let mut timeline = Timeline::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ])
    .unwrap();
    assert_eq!(timeline.status(), GameStatus::Won(Player::X));

    let before = timeline.clone();
    assert_eq!(
        timeline.play(Position::BottomRight).unwrap_err(),
        MoveError::GameOver
    );
    assert_eq!(timeline, before);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
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
    .unwrap();

    assert_eq!(timeline.status(), GameStatus::Draw);
    assert_eq!(timeline.len(), 10);
}

#[test]
fn test_win_on_last_square_is_not_draw() {
    // X O X / O X O / O X X
    let timeline = Timeline::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .unwrap();

    assert_eq!(timeline.board().occupied(), 9);
    assert_eq!(timeline.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_unknown_step_is_rejected() {
    let mut timeline = Timeline::replay(&[Position::Center]).unwrap();
    assert_eq!(timeline.jump_to(2), Err(MoveError::UnknownStep(2)));
    assert_eq!(timeline.step(), 1);
    assert_eq!(timeline.highlighted_step(), None);
}

#[test]
fn test_jump_highlights_until_next_move() {
    let mut timeline = Timeline::replay(&[Position::Center, Position::TopLeft]).unwrap();
    timeline.jump_to(1).unwrap();
    assert_eq!(timeline.highlighted_step(), Some(1));
    assert_eq!(timeline.highlighted_position(), Some(Position::Center));

    timeline.jump_to(0).unwrap();
    assert_eq!(timeline.highlighted_step(), Some(0));
    assert_eq!(timeline.highlighted_position(), None);

    timeline.play(Position::BottomRight).unwrap();
    assert_eq!(timeline.highlighted_step(), None);
}

#[test]
fn test_step_back_and_forward() {
    let mut timeline = Timeline::replay(&[Position::Center, Position::TopLeft]).unwrap();
    timeline.step_back().unwrap();
    timeline.step_back().unwrap();
    assert_eq!(timeline.step(), 0);
    assert!(timeline.step_back().is_err());

    timeline.step_forward().unwrap();
    assert_eq!(timeline.step(), 1);
    timeline.jump_to_latest().unwrap();
    assert_eq!(timeline.step(), 2);
    assert!(timeline.step_forward().is_err());
}

#[test]
fn test_labels_use_column_then_row() {
    let timeline = Timeline::replay(&[Position::TopRight, Position::BottomLeft]).unwrap();
    assert_eq!(
        timeline.labels(),
        vec![
            MoveLabel::GameStart,
            MoveLabel::Move {
                number: 1,
                column: 3,
                row: 1
            },
            MoveLabel::Move {
                number: 2,
                column: 1,
                row: 3
            },
        ]
    );
}
