//! Ranking and selection
//!
//! ## Algorithm
//! 1. Sort scored ventures by adjusted score, best first (stable)
//! 2. Keep a candidate pool of `pool_multiplier * count` (clamped to the catalog)
//! 3. Shuffle the pool so near-equal candidates rotate between runs
//! 4. Return the first `count`
//!
//! The top of the list is never buried: anything returned came from the pool.

use crate::shuffle::fisher_yates;
use rand::Rng;
use scoring::ScoredVenture;
use tracing::debug;

/// Selects `count` ventures out of a scored catalog.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    pool_multiplier: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self { pool_multiplier: 2 }
    }

    /// Configure the pool size as a multiple of `count` (default: 2).
    ///
    /// A multiplier of 1 turns the shuffle into a reordering of the top `count`.
    /// The value is stored as given: 0 makes every pool empty, so `select`
    /// returns nothing. `RecommenderConfig::validate` rejects 0 before a
    /// configured ranker is built.
    pub fn with_pool_multiplier(mut self, multiplier: usize) -> Self {
        self.pool_multiplier = multiplier;
        self
    }

    pub fn pool_multiplier(&self) -> usize {
        self.pool_multiplier
    }

    /// Sort best first. Equal scores keep their incoming order.
    pub fn rank(&self, mut scored: Vec<ScoredVenture>) -> Vec<ScoredVenture> {
        scored.sort_by(|a, b| b.score().total_cmp(&a.score()));
        scored
    }

    /// Pool size for a request of `count` from `available` ventures.
    pub fn pool_size(&self, count: usize, available: usize) -> usize {
        count.saturating_mul(self.pool_multiplier).min(available)
    }

    /// The ranked prefix that selection draws from, unshuffled.
    pub fn candidate_pool(&self, scored: Vec<ScoredVenture>, count: usize) -> Vec<ScoredVenture> {
        let size = self.pool_size(count, scored.len());
        let mut ranked = self.rank(scored);
        ranked.truncate(size);
        ranked
    }

    /// Rank, pool, shuffle, and cut to `count`.
    pub fn select<R>(
        &self,
        scored: Vec<ScoredVenture>,
        count: usize,
        rng: &mut R,
    ) -> Vec<ScoredVenture>
    where
        R: Rng + ?Sized,
    {
        if count == 0 {
            return Vec::new();
        }

        let mut pool = self.candidate_pool(scored, count);
        debug!("Shuffling candidate pool of {} for {} picks", pool.len(), count);
        fisher_yates(&mut pool, rng);
        pool.truncate(count);
        pool
    }
}
