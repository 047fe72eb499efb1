//! Uniform random sampling of categories and clues.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use tracing::{debug, instrument, warn};

use super::error::InsufficientPoolError;
use super::types::Clue;
use crate::provider::{CategoryId, RawClue};

/// Draws fixed-size random subsets, without replacement, for a new board.
///
/// Generic over the RNG so callers can seed it.
#[derive(Debug, Clone)]
pub struct BoardSampler<R = StdRng> {
    rng: R,
}

impl BoardSampler<StdRng> {
    /// Creates a sampler seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a sampler with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for BoardSampler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: rand::Rng> BoardSampler<R> {
    /// Creates a sampler around an existing RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Picks `count` distinct category ids from `pool`.
    ///
    /// Repeated ids in the pool count once.
    ///
    /// # Errors
    ///
    /// Returns [`InsufficientPoolError`] if the pool holds fewer than
    /// `count` distinct ids.
    #[instrument(skip(self, pool), fields(pool_size = pool.len()))]
    pub fn select_category_ids(
        &mut self,
        pool: &[CategoryId],
        count: usize,
    ) -> Result<Vec<CategoryId>, InsufficientPoolError> {
        let mut distinct: Vec<CategoryId> = Vec::with_capacity(pool.len());
        for id in pool {
            if !distinct.contains(id) {
                distinct.push(*id);
            }
        }

        let chosen = self.pick(&distinct, count)?;
        debug!(chosen = ?chosen, "Selected category ids");
        Ok(chosen)
    }

    /// Picks `count` clues from `pool` and turns each into a hidden [`Clue`].
    ///
    /// Clues are distinct by position in the pool, not by text.
    ///
    /// # Errors
    ///
    /// Returns [`InsufficientPoolError`] if the pool holds fewer than
    /// `count` clues.
    #[instrument(skip(self, pool), fields(pool_size = pool.len()))]
    pub fn select_clues(
        &mut self,
        pool: &[RawClue],
        count: usize,
    ) -> Result<Vec<Clue>, InsufficientPoolError> {
        let chosen = self.pick(pool, count)?;
        Ok(chosen
            .into_iter()
            .map(|raw| Clue::new(raw.question, raw.answer))
            .collect())
    }

    fn pick<T: Clone>(
        &mut self,
        pool: &[T],
        count: usize,
    ) -> Result<Vec<T>, InsufficientPoolError> {
        if pool.len() < count {
            warn!(required = count, available = pool.len(), "Pool too small to sample");
            return Err(InsufficientPoolError {
                required: count,
                available: pool.len(),
            });
        }

        Ok(index::sample(&mut self.rng, pool.len(), count)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect())
    }
}
