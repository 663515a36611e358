//! Tic-tac-toe against a rule-based opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`], [`GameStatus`]
//! - **Rules**: pure win/draw checks over any board ([`rules`])
//! - **State machine**: [`GameState`] validates and applies moves through
//!   move contracts and checks [`invariants`] in debug builds
//! - **Opponent**: [`OpponentPolicy`] walks a fixed cascade of rules, with
//!   random tie-breaks behind [`CellSelector`]
//! - **Session**: [`GameSession`] ties one game to one opponent
//!
//! # Example
//!
//! ```
//! use noughts_core::{FirstCandidate, GameSession, GameStatus, Mark};
//!
//! let mut session = GameSession::with_selector(FirstCandidate);
//! session.apply_move(0, Mark::X)?;
//!
//! let reply = session.compute_opponent_move()?;
//! assert_eq!(reply, 4);
//! session.apply_move(reply, Mark::O)?;
//!
//! assert_eq!(session.status(), GameStatus::InProgress);
//! # Ok::<(), noughts_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod invariants;
pub mod opponent;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{GameError, Move, MoveRejection};
pub use game::{GameState, MoveOutcome};
pub use opponent::{
    CellSelector, Decision, FirstCandidate, OpponentPolicy, RandomSelector, Rule, completes_line,
};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine};
pub use session::GameSession;
pub use types::{Board, BoardParseError, GameStatus, Mark, Square};
