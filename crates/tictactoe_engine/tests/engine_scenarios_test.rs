//! Scenario tests for the tic-tac-toe engine on a 3x3 board.

use tictactoe_engine::{
    Cell, Engine, EngineError, MoveClassification, Outcome, Player,
};

fn engine() -> Engine {
    Engine::new(3).expect("3x3 is supported")
}

#[test]
fn test_top_row_win_for_player_one() {
    let engine = engine();
    let mut state = engine.new_game();

    for index in [0, 3, 1, 4] {
        let report = engine.apply_move(&mut state, index).expect("Valid move");
        assert_eq!(report.outcome(), Outcome::InProgress);
    }

    let report = engine.apply_move(&mut state, 2).expect("Valid move");
    assert_eq!(report.classification(), MoveClassification::Accepted);
    assert_eq!(report.outcome(), Outcome::Win(Player::PlayerOne));
    assert_eq!(state.outcome(), Outcome::Win(Player::PlayerOne));
    assert!(state.is_over());
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / O O X / X X O
    let engine = engine();
    let state = engine
        .replay(&[0, 1, 2, 3, 5, 4, 6, 8, 7])
        .expect("Valid replay");

    assert_eq!(state.outcome(), Outcome::Draw);
    assert!(state.board().is_full());
    assert_eq!(state.outcome().winner(), None);
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    // X O O / X O X / X X O, the ninth mark completes the left column.
    let engine = engine();
    let state = engine
        .replay(&[0, 1, 3, 4, 5, 2, 7, 8, 6])
        .expect("Valid replay");

    assert!(state.board().is_full());
    assert_eq!(state.outcome(), Outcome::Win(Player::PlayerOne));
}

#[test]
fn test_row_major_fill_completes_diagonal_first() {
    // Filling 0..=6 in order hands X the 2-4-6 diagonal on the seventh move.
    let engine = engine();
    let state = engine.replay(&[0, 1, 2, 3, 4, 5, 6]).expect("Valid replay");
    assert_eq!(state.outcome(), Outcome::Win(Player::PlayerOne));

    let err = engine
        .replay(&[0, 1, 2, 3, 4, 5, 6, 8, 7])
        .expect_err("Moves after a win are rejected");
    assert_eq!(err, EngineError::InvalidState(Outcome::Win(Player::PlayerOne)));
}

#[test]
fn test_out_of_bounds_leaves_board_unchanged() {
    let engine = engine();
    let mut state = engine.replay(&[4]).expect("Valid replay");
    let before = state.clone();

    for index in [9, -1, 100, i64::MIN] {
        let report = engine.apply_move(&mut state, index).expect("Not an error");
        assert_eq!(report.classification(), MoveClassification::OutOfBounds);
        assert_eq!(report.outcome(), Outcome::InProgress);
        assert_eq!(state, before);
    }
}

#[test]
fn test_same_cell_twice_is_position_filled() {
    let engine = engine();
    let mut state = engine.new_game();

    engine.apply_move(&mut state, 0).expect("Valid move");
    let before = state.clone();
    let report = engine.apply_move(&mut state, 0).expect("Not an error");

    assert_eq!(report.classification(), MoveClassification::PositionFilled);
    assert_eq!(state, before);
    assert_eq!(state.board().get(0), Some(Cell::Occupied(Player::PlayerOne)));
    assert_eq!(state.current_player(), Player::PlayerTwo);
}

#[test]
fn test_reset_mid_game() {
    let engine = engine();
    let state = engine.replay(&[4, 0, 8]).expect("Valid replay");
    assert_eq!(state.current_player(), Player::PlayerTwo);

    let state = engine.reset(state);

    assert!(state.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(state.current_player(), Player::PlayerOne);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert!(state.history().is_empty());
}

#[test]
fn test_reset_after_win_allows_play() {
    let engine = engine();
    let state = engine.replay(&[0, 3, 1, 4, 2]).expect("Valid replay");

    let mut state = engine.reset(state);
    let report = engine.apply_move(&mut state, 2).expect("Fresh game accepts moves");

    assert!(report.is_accepted());
}

#[test]
fn test_replay_reports_rejected_move() {
    let engine = engine();
    let err = engine.replay(&[4, 4]).expect_err("Second move is filled");
    assert_eq!(
        err,
        EngineError::RejectedMove {
            index: 4,
            classification: MoveClassification::PositionFilled,
        }
    );
}

#[test]
fn test_valid_moves_shrink() {
    let engine = engine();
    let state = engine.replay(&[0, 4]).expect("Valid replay");
    let valid = state.board().valid_moves();
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&0));
    assert!(!valid.contains(&4));
}

#[test]
fn test_state_serializes_to_json() {
    let engine = engine();
    let state = engine.replay(&[4]).expect("Valid replay");

    let json = serde_json::to_value(&state).expect("Serializable");

    assert_eq!(json["current_player"], "PlayerTwo");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["history"], serde_json::json!([4]));
    assert_eq!(json["board"]["cells"][4], serde_json::json!({ "Occupied": "PlayerOne" }));
}

#[test]
fn test_larger_board_needs_full_line() {
    let engine = Engine::new(4).expect("4x4 is supported");
    // X takes 0, 1, 2 of the top row; three in a row is not enough on 4x4.
    let mut state = engine.replay(&[0, 4, 1, 5, 2, 6]).expect("Valid replay");
    assert_eq!(state.outcome(), Outcome::InProgress);

    let report = engine.apply_move(&mut state, 3).expect("Valid move");
    assert_eq!(report.outcome(), Outcome::Win(Player::PlayerOne));
}
