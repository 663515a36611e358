//! Contract-based validation for moves.
//!
//! A contract pairs the preconditions a move must satisfy with the
//! postconditions the resulting state must satisfy: {P} move {Q}.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::{GameError, GameState, Move, MoveRejection};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not finished.
pub struct GameActive;

impl GameActive {
    /// Rejects moves on a won or drawn game.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveRejection> {
        if game.status().is_over() {
            Err(MoveRejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the mover's turn.
pub struct MarksTurn;

impl MarksTurn {
    /// Rejects a mark that is not the one expected to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveRejection> {
        if mov.mark != game.current_turn() {
            Err(MoveRejection::WrongTurn(mov.mark))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveRejection> {
        if !game.board().is_empty(mov.position) {
            Err(MoveRejection::Occupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal on an active game, in turn, on an
/// empty square. Checked in that order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveRejection> {
        GameActive::check(game)?;
        MarksTurn::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: [`LegalMove`].
///
/// Postconditions: every [`GameInvariants`] member holds and exactly one
/// move was added to the history.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), GameError> {
        LegalMove::check(action, game).map_err(GameError::from)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one move"
            );
            return Err(GameError::InvariantViolation(
                "Postcondition failed: history did not grow by one move".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
