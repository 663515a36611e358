//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions whose joint occupation by one mark wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The positions of this line.
    pub fn positions(self) -> [Position; 3] {
        self.0
    }

    /// Board indices of this line.
    pub fn indices(self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns true if all three squares hold `mark`.
    pub fn is_held_by(self, board: &Board, mark: Mark) -> bool {
        self.0
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(mark))
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

use crate::position::Position::*;

/// Every winning line: rows top to bottom, columns left to right, then the
/// two diagonals. Lookups report the first satisfied line in this order.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([TopLeft, TopCenter, TopRight]),
    WinLine([MiddleLeft, Center, MiddleRight]),
    WinLine([BottomLeft, BottomCenter, BottomRight]),
    // Columns
    WinLine([TopLeft, MiddleLeft, BottomLeft]),
    WinLine([TopCenter, Center, BottomCenter]),
    WinLine([TopRight, MiddleRight, BottomRight]),
    // Diagonals
    WinLine([TopLeft, Center, BottomRight]),
    WinLine([TopRight, Center, BottomLeft]),
];

/// Returns the first line held entirely by `mark`, if any.
#[instrument(skip(board))]
pub fn check_win(board: &Board, mark: Mark) -> Option<WinLine> {
    WIN_LINES
        .into_iter()
        .find(|line| line.is_held_by(board, mark))
}

/// Returns the first completed line on the board and the mark holding it.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<(Mark, WinLine)> {
    WIN_LINES.into_iter().find_map(|line| {
        let [a, ..] = line.positions();
        board
            .get(a)
            .mark()
            .filter(|mark| line.is_held_by(board, *mark))
            .map(|mark| (mark, line))
    })
}
