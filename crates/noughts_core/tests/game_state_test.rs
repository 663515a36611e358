//! Tests for the game state machine.

use noughts_core::{
    Board, GameError, GameState, GameStatus, Mark, MoveRejection, Position, Square, WinLine,
};

/// X takes the top row while O answers center then corner 8.
const TOP_ROW_WIN: [(usize, Mark); 5] = [
    (0, Mark::X),
    (4, Mark::O),
    (1, Mark::X),
    (8, Mark::O),
    (2, Mark::X),
];

fn play(moves: &[(usize, Mark)]) -> GameState {
    let mut game = GameState::new();
    for &(index, mark) in moves {
        game.apply_move(index, mark)
            .unwrap_or_else(|e| panic!("{mark}@{index} rejected: {e}"));
    }
    game
}

#[test]
fn test_top_row_win() {
    let mut game = GameState::new();
    let mut outcome = None;
    for (index, mark) in TOP_ROW_WIN {
        outcome = Some(game.apply_move(index, mark).expect("Valid move"));
    }
    let outcome = outcome.unwrap();

    assert_eq!(outcome.status(), GameStatus::Won(Mark::X));
    assert_eq!(outcome.win_line().map(WinLine::indices), Some([0, 1, 2]));
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_draw() {
    // X O X / X O O / O X X
    let game = play(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (4, Mark::O),
        (3, Mark::X),
        (5, Mark::O),
        (7, Mark::X),
        (6, Mark::O),
        (8, Mark::X),
    ]);

    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.is_draw());
    assert_eq!(game.win_line(), None);
    assert_eq!(game.check_win(Mark::X), None);
    assert_eq!(game.check_win(Mark::O), None);
}

#[test]
fn test_middle_row_ends_game_before_board_fills() {
    // O completes 3-4-5 on the eighth move; X's ninth move is refused.
    let mut game = play(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (4, Mark::O),
        (6, Mark::X),
        (3, Mark::O),
        (7, Mark::X),
        (5, Mark::O),
    ]);

    assert_eq!(game.status(), GameStatus::Won(Mark::O));
    assert_eq!(game.win_line().map(WinLine::indices), Some([3, 4, 5]));
    assert_eq!(
        game.apply_move(8, Mark::X),
        Err(GameError::InvalidMove(MoveRejection::GameOver))
    );
    assert!(game.board().is_empty(Position::BottomRight));
}

#[test]
fn test_win_on_last_square_beats_draw() {
    // X fills the board and completes the left column with the same move.
    let game = play(&[
        (0, Mark::X),
        (1, Mark::O),
        (3, Mark::X),
        (4, Mark::O),
        (2, Mark::X),
        (5, Mark::O),
        (7, Mark::X),
        (8, Mark::O),
        (6, Mark::X),
    ]);

    assert_eq!(game.board().filled(), 9);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.win_line().map(WinLine::indices), Some([0, 3, 6]));
    assert!(!game.is_draw());
}

#[test]
fn test_invalid_moves_leave_state_unchanged() {
    let mut game = play(&[(4, Mark::X)]);
    let snapshot = game.clone();

    let cases = [
        (4, Mark::O, MoveRejection::Occupied(Position::Center)),
        (9, Mark::O, MoveRejection::OutOfRange(9)),
        (usize::MAX, Mark::O, MoveRejection::OutOfRange(usize::MAX)),
        (0, Mark::X, MoveRejection::WrongTurn(Mark::X)),
    ];

    for (index, mark, rejection) in cases {
        assert_eq!(
            game.apply_move(index, mark),
            Err(GameError::InvalidMove(rejection))
        );
        assert_eq!(game, snapshot);
    }
}

#[test]
fn test_finished_game_rejects_everything() {
    let mut game = play(&TOP_ROW_WIN);
    let snapshot = game.clone();

    for index in 0..9 {
        for mark in [Mark::X, Mark::O] {
            let err = game.apply_move(index, mark).unwrap_err();
            assert!(err.is_invalid_move());
        }
    }
    assert_eq!(game, snapshot);
}

#[test]
fn test_reset_after_game() {
    let mut game = play(&TOP_ROW_WIN);
    game.reset();

    assert_eq!(game.board(), &Board::new());
    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_turn(), Mark::X);
    assert_eq!(game.win_line(), None);
    assert!(game.history().is_empty());

    // Playable again.
    assert!(game.apply_move(0, Mark::X).is_ok());
}

#[test]
fn test_history_records_moves() {
    let game = play(&[(4, Mark::X), (0, Mark::O), (8, Mark::X)]);
    let history = game.history();
    let positions: Vec<_> = history.iter().map(|m| m.position().to_index()).collect();
    let marks: Vec<_> = history.iter().map(|m| m.mark()).collect();
    assert_eq!(positions, vec![4, 0, 8]);
    assert_eq!(marks, vec![Mark::X, Mark::O, Mark::X]);
}
