//! Tie-breaking among equally good cells.
//!
//! The opponent's corner, side and fallback rules pick uniformly at random
//! among their candidates. The choice goes through [`CellSelector`] so games
//! can be seeded and tests can be exact.

use crate::Position;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};

/// Picks one position out of a candidate list.
pub trait CellSelector {
    /// Chooses one of `candidates`, or `None` when the list is empty.
    ///
    /// Implementations must return a member of `candidates`.
    fn select(&mut self, candidates: &[Position]) -> Option<Position>;
}

impl<S: CellSelector + ?Sized> CellSelector for &mut S {
    fn select(&mut self, candidates: &[Position]) -> Option<Position> {
        (**self).select(candidates)
    }
}

impl<S: CellSelector + ?Sized> CellSelector for Box<S> {
    fn select(&mut self, candidates: &[Position]) -> Option<Position> {
        (**self).select(candidates)
    }
}

/// Uniform random selection backed by ChaCha8.
///
/// The same seed always produces the same sequence of picks.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomSelector {
    /// Creates a selector with the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a selector with a fresh random seed.
    ///
    /// The seed is logged so a surprising game can be replayed.
    #[must_use]
    #[instrument]
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        info!(seed, "Seeding opponent selector");
        Self::seeded(seed)
    }

    /// The seed this selector started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl CellSelector for RandomSelector {
    fn select(&mut self, candidates: &[Position]) -> Option<Position> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Always picks the lowest-index candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl CellSelector for FirstCandidate {
    fn select(&mut self, candidates: &[Position]) -> Option<Position> {
        candidates.iter().min().copied()
    }
}
