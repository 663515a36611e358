//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, GameStatus, Mark, Move};

/// Invariant: marks alternate starting with X.
///
/// While the game is in progress the mark to move is X after an even
/// number of moves and O after an odd number. A finished game keeps the
/// turn of the mark that ended it.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if history.first().is_some_and(|m| m.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        match game.status() {
            GameStatus::InProgress => {
                let expected = if history.len() % 2 == 0 {
                    Mark::X
                } else {
                    Mark::O
                };
                game.current_turn() == expected
            }
            _ => history.last().map(Move::mark) == Some(game.current_turn()),
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
