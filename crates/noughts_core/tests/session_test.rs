//! Tests for the game session interface.

use noughts_core::{
    FirstCandidate, GameError, GameSession, GameStatus, Mark, MoveRejection, Square,
};

#[test]
fn test_human_then_opponent_turns() {
    let mut session = GameSession::with_selector(FirstCandidate);

    session.apply_move(0, Mark::X).unwrap();
    assert!(session.is_opponent_turn());

    // The human cannot move again while the opponent is due.
    assert_eq!(
        session.apply_move(1, Mark::X),
        Err(GameError::InvalidMove(MoveRejection::WrongTurn(Mark::X)))
    );

    let index = session.compute_opponent_move().unwrap();
    session.apply_move(index, Mark::O).unwrap();
    assert_eq!(session.current_turn(), Mark::X);
}

#[test]
fn test_opponent_blocks_in_session() {
    let mut session = GameSession::with_selector(FirstCandidate);
    session.apply_move(0, Mark::X).unwrap();
    session.play_opponent().unwrap(); // center
    session.apply_move(1, Mark::X).unwrap();

    assert_eq!(session.compute_opponent_move(), Ok(2));
}

#[test]
fn test_opponent_refuses_after_game_over() {
    let mut session = GameSession::with_selector(FirstCandidate);
    session.apply_move(0, Mark::X).unwrap();
    session.play_opponent().unwrap(); // O center
    session.apply_move(8, Mark::X).unwrap();
    session.play_opponent().unwrap(); // O takes corner 2
    session.apply_move(6, Mark::X).unwrap(); // X forks 3 and 7
    session.play_opponent().unwrap(); // O blocks 3
    session.apply_move(7, Mark::X).unwrap(); // X completes 6-7-8

    assert_eq!(session.status(), GameStatus::Won(Mark::X));
    assert_eq!(session.win_line().map(|l| l.indices()), Some([6, 7, 8]));
    assert_eq!(
        session.compute_opponent_move(),
        Err(GameError::InvalidMove(MoveRejection::GameOver))
    );
}

#[test]
fn test_reset_restores_session() {
    let mut session = GameSession::with_selector(FirstCandidate);
    session.apply_move(4, Mark::X).unwrap();
    session.play_opponent().unwrap();
    session.reset();

    assert_eq!(session.board(), [Square::Empty; 9]);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.current_turn(), Mark::X);
    assert!(session.history().is_empty());
}
