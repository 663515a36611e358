//! Moves and the errors they can produce.
//!
//! A move is a value describing intent. It is validated against the game
//! before anything on the board changes.

use crate::{Mark, Position};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the mark of this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// Index outside 0-8.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejection {}

/// Errors raised by the game state machine and the opponent.
///
/// Every variant is recoverable: the game is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum GameError {
    /// The move cannot be played right now.
    #[display("Invalid move: {}", _0)]
    #[from]
    InvalidMove(MoveRejection),

    /// The opponent was asked to move on a board with no empty square.
    #[display("No move available")]
    NoMoveAvailable,

    /// A move broke a game invariant (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// Returns true for stray input the caller may silently ignore.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::InvalidMove(_))
    }
}
