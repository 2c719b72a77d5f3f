//! Tests for move preconditions and timeline invariants.

use tictac_rewind::{
    Contract, GameUndecided, InvariantSet, MoveError, PlayContract, Position, SquareIsEmpty,
    Timeline, TimelineInvariants,
};

fn x_wins_top_row() -> Timeline {
    Timeline::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ])
    .unwrap()
}

#[test]
fn test_empty_square_precondition() {
    let timeline = Timeline::replay(&[Position::Center]).unwrap();
    assert!(SquareIsEmpty::check(Position::TopLeft, &timeline).is_ok());
    assert_eq!(
        SquareIsEmpty::check(Position::Center, &timeline),
        Err(MoveError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_undecided_precondition() {
    assert!(GameUndecided::check(&Timeline::new()).is_ok());
    assert_eq!(GameUndecided::check(&x_wins_top_row()), Err(MoveError::GameOver));
}

#[test]
fn test_game_over_reported_before_occupied() {
    let timeline = x_wins_top_row();
    assert_eq!(
        PlayContract::pre(&timeline, &Position::TopLeft),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_rewound_winning_game_accepts_moves() {
    let mut timeline = x_wins_top_row();
    timeline.jump_to(4).unwrap();
    assert!(PlayContract::pre(&timeline, &Position::BottomRight).is_ok());
}

#[test]
fn test_postcondition_after_branching_play() {
    let mut timeline = x_wins_top_row();
    timeline.jump_to(2).unwrap();
    let before = timeline.clone();
    timeline.play(Position::BottomRight).unwrap();

    assert!(PlayContract::post(&before, &timeline).is_ok());
    assert!(TimelineInvariants::check_all(&timeline).is_ok());
}

#[test]
fn test_postcondition_rejects_unrelated_timeline() {
    let before = Timeline::replay(&[Position::Center]).unwrap();
    let after = Timeline::replay(&[Position::TopLeft, Position::Center]).unwrap();
    assert!(matches!(
        PlayContract::post(&before, &after),
        Err(MoveError::InvariantViolation(_))
    ));
}
