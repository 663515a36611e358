//! Rule-based opponent.
//!
//! The opponent walks a fixed cascade of rules and plays the first one that
//! yields a cell:
//!
//! 1. [`Rule::WinNow`]: complete one of its own lines.
//! 2. [`Rule::Block`]: occupy the cell that would complete a human line.
//! 3. [`Rule::Center`]: take the center.
//! 4. [`Rule::Corner`]: take a random free corner.
//! 5. [`Rule::Side`]: take a random free side.
//! 6. [`Rule::Any`]: take any random free cell.
//!
//! Every lookahead runs on a copy of the board, so deciding never changes the
//! game. Ties in the first two rules go to the lowest index; ties in the
//! last three go to the injected [`CellSelector`].

mod selector;

pub use selector::{CellSelector, FirstCandidate, RandomSelector};

use crate::rules::check_win;
use crate::{Board, GameError, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A rule of the opponent's cascade, in evaluation order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Rule {
    /// Complete a line for the opponent.
    #[strum(to_string = "win now")]
    WinNow,
    /// Stop the human from completing a line.
    #[strum(to_string = "block")]
    Block,
    /// Take the center square.
    #[strum(to_string = "center")]
    Center,
    /// Take a free corner.
    #[strum(to_string = "corner")]
    Corner,
    /// Take a free side.
    #[strum(to_string = "side")]
    Side,
    /// Take any free square.
    #[strum(to_string = "any")]
    Any,
}

/// The opponent's chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    position: Position,
    rule: Rule,
}

impl Decision {
    /// The chosen position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The chosen board index (0-8).
    pub fn index(&self) -> usize {
        self.position.to_index()
    }

    /// The rule that produced this decision.
    pub fn rule(&self) -> Rule {
        self.rule
    }
}

/// Returns true if placing `mark` at `pos` would complete a line for it.
///
/// Pure: the lookahead is made on a copy and `board` is never touched.
pub fn completes_line(board: &Board, pos: Position, mark: Mark) -> bool {
    board.is_empty(pos) && check_win(&board.with(pos, mark), mark).is_some()
}

/// The fixed-heuristic opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentPolicy {
    human: Mark,
    opponent: Mark,
}

impl OpponentPolicy {
    /// Creates a policy playing against `human`.
    pub fn new(human: Mark) -> Self {
        Self {
            human,
            opponent: human.opponent(),
        }
    }

    /// The human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// The mark this policy plays.
    pub fn opponent(&self) -> Mark {
        self.opponent
    }

    /// Walks the cascade and returns the first cell any rule yields.
    ///
    /// # Errors
    ///
    /// [`GameError::NoMoveAvailable`] if the board has no empty square.
    #[instrument(skip(self, selector), fields(board = %board))]
    pub fn decide<S>(&self, board: &Board, selector: &mut S) -> Result<Decision, GameError>
    where
        S: CellSelector + ?Sized,
    {
        let Self { human, opponent } = *self;
        let (corners, sides) = (Position::CORNERS, Position::SIDES);
        let free = board.empty_positions();
        if free.is_empty() {
            warn!("Opponent asked to move on a full board");
            return Err(GameError::NoMoveAvailable);
        }

        let decision = self
            .first_completing(board, &free, opponent, Rule::WinNow)
            .or_else(|| self.first_completing(board, &free, human, Rule::Block))
            .or_else(|| {
                board.is_empty(Position::Center).then_some(Decision {
                    position: Position::Center,
                    rule: Rule::Center,
                })
            })
            .or_else(|| pick_among(board, &corners, Rule::Corner, selector))
            .or_else(|| pick_among(board, &sides, Rule::Side, selector))
            .or_else(|| pick_among(board, &free, Rule::Any, selector))
            .ok_or(GameError::NoMoveAvailable)?;

        debug!(
            index = decision.index(),
            rule = %decision.rule(),
            "Opponent chose move"
        );
        Ok(decision)
    }

    /// Convenience wrapper returning only the board index.
    ///
    /// # Errors
    ///
    /// See [`OpponentPolicy::decide`].
    pub fn choose_move<S>(&self, board: &Board, selector: &mut S) -> Result<usize, GameError>
    where
        S: CellSelector + ?Sized,
    {
        self.decide(board, selector).map(|d| d.index())
    }

    fn first_completing(
        &self,
        board: &Board,
        free: &[Position],
        mark: Mark,
        rule: Rule,
    ) -> Option<Decision> {
        free.iter()
            .copied()
            .find(|pos| completes_line(board, *pos, mark))
            .map(|position| Decision { position, rule })
    }
}

impl Default for OpponentPolicy {
    /// Human plays X, the opponent plays O.
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

fn pick_among<S>(
    board: &Board,
    group: &[Position],
    rule: Rule,
    selector: &mut S,
) -> Option<Decision>
where
    S: CellSelector + ?Sized,
{
    let candidates: Vec<Position> = group
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let position = selector.select(&candidates)?;
    if !candidates.contains(&position) {
        warn!(?position, %rule, "Selector returned a non-candidate; ignoring it");
        return None;
    }
    Some(Decision { position, rule })
}
