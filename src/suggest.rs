//! One-shot opponent move for a board given on the command line.

use anyhow::{Context, Result};
use noughts_core::{
    Board, Decision, GameError, MoveRejection, OpponentPolicy, RandomSelector, rules,
};
use tracing::{info, instrument, warn};

/// Picks the opponent's reply for `board_text`, e.g. `XX..O....`.
///
/// Boards where either mark already holds a line are refused with
/// [`MoveRejection::GameOver`]; a full board yields
/// [`GameError::NoMoveAvailable`]. Mark counts are not checked.
#[instrument]
pub fn suggest(board_text: &str, seed: Option<u64>) -> Result<Decision> {
    let board: Board = board_text
        .parse()
        .with_context(|| format!("Invalid board {:?}", board_text))?;

    if let Some((mark, line)) = rules::winner(&board) {
        warn!(%mark, %line, "Board is already won");
        return Err(GameError::InvalidMove(MoveRejection::GameOver).into());
    }

    let mut selector = match seed {
        Some(seed) => RandomSelector::seeded(seed),
        None => RandomSelector::from_entropy(),
    };

    let decision = OpponentPolicy::default().decide(&board, &mut selector)?;
    info!(
        position = %decision.position(),
        rule = %decision.rule(),
        seed = selector.seed(),
        "Opponent move chosen"
    );
    Ok(decision)
}
