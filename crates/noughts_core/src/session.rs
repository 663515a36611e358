//! A single human-versus-opponent game session.

use crate::opponent::{CellSelector, Decision, OpponentPolicy, RandomSelector};
use crate::rules::WinLine;
use crate::{
    Board, GameError, GameState, GameStatus, Mark, Move, MoveOutcome, MoveRejection, Square,
};
use tracing::{debug, info, instrument};

/// One game between a human and the rule-based opponent.
///
/// The session owns its [`GameState`]; separate sessions share nothing.
/// The human plays X and moves first, the opponent plays O.
#[derive(Debug, Clone)]
pub struct GameSession<S = RandomSelector> {
    state: GameState,
    policy: OpponentPolicy,
    selector: S,
}

impl GameSession<RandomSelector> {
    /// Creates a session whose opponent breaks ties at random.
    #[instrument]
    pub fn new() -> Self {
        Self::with_selector(RandomSelector::from_entropy())
    }

    /// Creates a session with reproducible opponent tie-breaks.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_selector(RandomSelector::seeded(seed))
    }
}

impl Default for GameSession<RandomSelector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CellSelector> GameSession<S> {
    /// Creates a session using `selector` for the opponent's random rules.
    pub fn with_selector(selector: S) -> Self {
        let policy = OpponentPolicy::new(Mark::X);
        info!(human = %policy.human(), opponent = %policy.opponent(), "Starting game session");
        Self {
            state: GameState::new(),
            policy,
            selector,
        }
    }

    /// The human's mark.
    pub fn human(&self) -> Mark {
        self.policy.human()
    }

    /// The opponent's mark.
    pub fn opponent(&self) -> Mark {
        self.policy.opponent()
    }

    /// Read-only snapshot of the nine squares.
    pub fn board(&self) -> [Square; 9] {
        *self.state.board().squares()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the mark expected to move next.
    pub fn current_turn(&self) -> Mark {
        self.state.current_turn()
    }

    /// The winning line, once the game is won.
    pub fn win_line(&self) -> Option<WinLine> {
        self.state.win_line()
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// The underlying game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// True when the game is running and waiting on the opponent.
    pub fn is_opponent_turn(&self) -> bool {
        self.status() == GameStatus::InProgress && self.current_turn() == self.opponent()
    }

    /// Places `mark` at `index`. The only way to change the board.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidMove`] for an off-board index, an occupied
    /// square, the wrong mark or a finished game. Nothing changes on error.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<MoveOutcome, GameError> {
        self.state.apply_move(index, mark)
    }

    /// Asks the opponent for its next cell without playing it.
    ///
    /// The game state is not modified; feed the result to
    /// [`GameSession::apply_move`].
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidMove`] if the game is over or it is the human's
    /// turn, [`GameError::NoMoveAvailable`] if no square is free.
    pub fn compute_opponent_move(&mut self) -> Result<usize, GameError> {
        self.decide().map(|d| d.index())
    }

    /// Like [`GameSession::compute_opponent_move`] but also reports the
    /// rule that picked the cell.
    ///
    /// # Errors
    ///
    /// See [`GameSession::compute_opponent_move`].
    #[instrument(skip(self), fields(board = %self.state.board()))]
    pub fn decide(&mut self) -> Result<Decision, GameError> {
        if self.status().is_over() {
            return Err(MoveRejection::GameOver.into());
        }
        if self.current_turn() != self.opponent() {
            debug!("Opponent asked to move on the human's turn");
            return Err(MoveRejection::WrongTurn(self.opponent()).into());
        }
        self.policy.decide(self.state.board(), &mut self.selector)
    }

    /// Computes and plays the opponent's move.
    ///
    /// # Errors
    ///
    /// See [`GameSession::compute_opponent_move`].
    #[instrument(skip(self))]
    pub fn play_opponent(&mut self) -> Result<(Decision, MoveOutcome), GameError> {
        let decision = self.decide()?;
        let outcome = self.apply_move(decision.index(), self.opponent())?;
        Ok((decision, outcome))
    }

    /// Restores the initial state: empty board, X to move.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Board as a [`Board`] value, handy for rendering.
    pub fn board_ref(&self) -> &Board {
        self.state.board()
    }
}
