//! Balanced marks invariant: X leads O by at most one.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X always moves first and the players alternate, so O can never be
/// ahead and X can never be two marks ahead.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one marks"
    }
}
