//! Content-based scoring
//!
//! Scores each venture against what the traveller said they want:
//!
//! | Factor     | Weight | Rule                                              |
//! |------------|--------|---------------------------------------------------|
//! | Tags       | 40     | share of the venture's tags found in the vibes    |
//! | Location   | 20     | flat bonus on an exact location match             |
//! | Budget     | 20     | [`budget_score`] for the traveller's tier         |
//! | Rating     | 10     | rating / 5                                        |
//! | Popularity | 10     | popularity / 100                                  |
//!
//! String comparisons are exact and case-sensitive.

use crate::budget::budget_score;
use crate::types::{
    BUDGET_WEIGHT, LOCATION_WEIGHT, POPULARITY_WEIGHT, RATING_WEIGHT, ScoreBreakdown,
    ScoredVenture, TAG_WEIGHT,
};
use catalog::{UserProfile, Venture};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Catalogs smaller than this are scored on the calling thread.
const PARALLEL_THRESHOLD: usize = 512;

/// Stateless content scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentScorer;

impl ContentScorer {
    pub fn new() -> Self {
        Self
    }

    /// Content score for one venture, in `0.0..=100.0` for conventional inputs.
    pub fn score(&self, venture: &Venture, profile: &UserProfile) -> f64 {
        self.breakdown(venture, profile).total()
    }

    /// Per-factor contributions for one venture.
    pub fn breakdown(&self, venture: &Venture, profile: &UserProfile) -> ScoreBreakdown {
        ScoreBreakdown {
            tag_match: tag_overlap(&venture.tags, &profile.vibes) * TAG_WEIGHT,
            location_match: if profile.locations.contains(&venture.location) {
                LOCATION_WEIGHT
            } else {
                0.0
            },
            budget_fit: budget_score(venture.price, profile.budget_tier) * BUDGET_WEIGHT,
            rating: (venture.rating / 5.0) * RATING_WEIGHT,
            popularity: (venture.popularity / 100.0) * POPULARITY_WEIGHT,
        }
    }

    /// Score a whole catalog. Output order matches input order.
    #[instrument(skip_all, fields(ventures = ventures.len()))]
    pub fn score_all(&self, ventures: &[Venture], profile: &UserProfile) -> Vec<ScoredVenture> {
        let score_one = |venture: &Venture| {
            ScoredVenture::new(venture.clone(), self.breakdown(venture, profile))
        };

        let scored: Vec<ScoredVenture> = if ventures.len() >= PARALLEL_THRESHOLD {
            ventures.par_iter().map(score_one).collect()
        } else {
            ventures.iter().map(score_one).collect()
        };
        debug!("Scored {} ventures", scored.len());
        scored
    }
}

/// Fraction of `tags` that appear in `vibes`. An untagged venture scores 0.
fn tag_overlap(tags: &[String], vibes: &[String]) -> f64 {
    let matches = tags.iter().filter(|tag| vibes.contains(tag)).count();
    matches as f64 / tags.len().max(1) as f64
}
