//! History consistency invariant: the board is exactly the moves played.

use super::Invariant;
use crate::{GameState, Square};
use std::collections::HashSet;

/// Invariant: every recorded move is on the board and nothing else is.
///
/// Moves never repeat a position, each recorded mark still sits on its
/// square, and the number of filled squares equals the history length.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let unique: HashSet<_> = history.iter().map(|m| m.position).collect();
        if unique.len() != history.len() {
            return false;
        }

        let recorded = history
            .iter()
            .all(|m| game.board().get(m.position) == Square::Occupied(m.mark));

        recorded && game.board().filled() == history.len()
    }

    fn description() -> &'static str {
        "Board matches move history"
    }
}
