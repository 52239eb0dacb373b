//! Tests for jumping through history and branching play.

use strictly_timeline::{Cell, EngineError, GameEngine, Mark};

#[test]
fn test_jump_keeps_history() {
    let mut engine = GameEngine::replay(&[0, 4, 1, 5]).expect("Valid replay");
    let history = engine.history().to_vec();

    for step in [0, 3, 1, 4, 2] {
        engine.jump_to(step).expect("Valid step");
        assert_eq!(engine.history_length(), 5);
        assert_eq!(engine.current_step(), step);
        assert_eq!(engine.current_board(), history[step].board());
    }
    assert_eq!(engine.history(), history.as_slice());
}

#[test]
fn test_jump_forward_after_rewind() {
    let mut engine = GameEngine::replay(&[0, 4, 1]).expect("Valid replay");
    let latest = *engine.current_board();
    engine.jump_to(0).expect("Valid step");
    engine.jump_to(3).expect("Valid step");
    assert_eq!(engine.current_board(), &latest);
}

#[test]
fn test_move_after_rewind_truncates_future() {
    let mut engine = GameEngine::replay(&[0, 4, 1, 5, 2]).expect("Valid replay");
    assert_eq!(engine.history_length(), 6);

    engine.jump_to(2).expect("Valid step");
    engine.apply_move(8).expect("Valid move");

    // history[0..=2] kept, one new entry appended
    assert_eq!(engine.history_length(), 4);
    assert_eq!(engine.current_step(), 3);
    let board = engine.current_board();
    assert_eq!(board.get(0), Some(Cell::Marked(Mark::X)));
    assert_eq!(board.get(4), Some(Cell::Marked(Mark::O)));
    assert_eq!(board.get(8), Some(Cell::Marked(Mark::X)));
    assert!(board.is_empty(1));
    assert!(board.is_empty(5));
    assert!(board.is_empty(2));
}

#[test]
fn test_rewind_to_start_gives_x_again() {
    let mut engine = GameEngine::replay(&[0, 4]).expect("Valid replay");
    engine.jump_to(0).expect("Valid step");
    assert_eq!(engine.current_player(), Mark::X);

    engine.apply_move(8).expect("Valid move");
    assert_eq!(engine.current_board().get(8), Some(Cell::Marked(Mark::X)));
    assert_eq!(engine.history_length(), 2);
    assert!(engine.current_board().is_empty(0));
}

#[test]
fn test_turn_follows_viewed_step_parity() {
    let mut engine = GameEngine::replay(&[0, 4, 1, 5]).expect("Valid replay");
    for step in 0..engine.history_length() {
        engine.jump_to(step).expect("Valid step");
        let expected = if step % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(engine.current_player(), expected);
    }
}

#[test]
fn test_rewind_from_win_reopens_play() {
    let mut engine = GameEngine::replay(&[0, 4, 1, 5, 2]).expect("Valid replay");
    engine.jump_to(4).expect("Valid step");
    assert_eq!(engine.current_winner(), None);

    let outcome = engine.apply_move(3).expect("Valid move");
    assert!(outcome.is_placed());
    assert_eq!(engine.history_length(), 6);
    assert_eq!(engine.current_board().get(3), Some(Cell::Marked(Mark::X)));
    assert_eq!(engine.current_winner(), None);
}

#[test]
fn test_ignored_move_after_rewind_keeps_future() {
    let mut engine = GameEngine::replay(&[0, 4, 1]).expect("Valid replay");
    engine.jump_to(1).expect("Valid step");

    let outcome = engine.apply_move(0).expect("In-range move");
    assert!(!outcome.is_placed());
    assert_eq!(engine.history_length(), 4);
    assert_eq!(engine.current_step(), 1);
}

#[test]
fn test_jump_past_end() {
    let mut engine = GameEngine::new();
    let err = engine.jump_to(1).expect_err("Step 1 does not exist yet");
    assert_eq!(err, EngineError::StepOutOfRange { step: 1, len: 1 });
    assert!(err.is_invalid_index());
}
