//! The tic-tac-toe state machine.

use crate::contracts::{Contract, MoveContract};
use crate::rules::{self, WinLine};
use crate::{Board, GameError, GameStatus, Mark, Move, MoveRejection, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    status: GameStatus,
    win_line: Option<WinLine>,
}

impl MoveOutcome {
    /// Status after the move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The completed line, present only when the move won the game.
    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }
}

/// Complete game state: board, turn, status and history.
///
/// [`GameState::apply_move`] is the only way to change a square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_turn: Mark,
    pub(crate) status: GameStatus,
    pub(crate) win_line: Option<WinLine>,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::X,
            status: GameStatus::InProgress,
            win_line: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark expected to move next.
    ///
    /// Once the game is over this stays on the mark that ended it.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The line that won the game, if it has been won.
    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Places `mark` at board `index` (0-8).
    ///
    /// The win for the mark just played is checked before the full-board
    /// draw, so a move that fills the board and completes a line wins. The
    /// turn passes to the other mark only while the game stays in progress.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidMove`] when the index is off the board, the game
    /// is over, it is not `mark`'s turn or the square is taken. The state is
    /// unchanged on every error.
    #[instrument(skip(self), fields(turn = %self.current_turn, status = ?self.status))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<MoveOutcome, GameError> {
        let position = Position::from_index(index)
            .ok_or(MoveRejection::OutOfRange(index))?;
        let action = Move::new(mark, position);

        MoveContract::pre(self, &action)?;

        let mut next = self.clone();
        next.commit(action);

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;
        debug!(%action, status = ?self.status, "Move applied");

        if let Some(winner) = self.status.winner() {
            info!(%winner, line = ?self.win_line.map(WinLine::indices), "Game won");
        } else if self.status == GameStatus::Draw {
            info!("Game drawn");
        }

        Ok(MoveOutcome {
            status: self.status,
            win_line: self.win_line,
        })
    }

    fn commit(&mut self, action: Move) {
        let Move { mark, position } = action;
        self.board.set(position, Square::Occupied(mark));
        self.history.push(action);

        if let Some(line) = self.check_win(action.mark) {
            self.status = GameStatus::Won(action.mark);
            self.win_line = Some(line);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.current_turn = action.mark.opponent();
        }
    }

    /// Returns the first line held by `mark` (rows, then columns, then
    /// diagonals), if any.
    pub fn check_win(&self, mark: Mark) -> Option<WinLine> {
        rules::check_win(&self.board, mark)
    }

    /// True iff every square is filled and neither mark holds a line.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Restores the initial state.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
