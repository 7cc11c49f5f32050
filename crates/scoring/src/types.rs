//! Scored ventures and per-factor score breakdowns.

use catalog::Venture;

/// Weight of the tag/vibe overlap factor.
pub const TAG_WEIGHT: f64 = 40.0;
/// Flat bonus when the venture's location is one the traveller asked for.
pub const LOCATION_WEIGHT: f64 = 20.0;
/// Weight of the budget fit factor.
pub const BUDGET_WEIGHT: f64 = 20.0;
pub const RATING_WEIGHT: f64 = 10.0;
pub const POPULARITY_WEIGHT: f64 = 10.0;

/// How a content score was put together. Every field is already weighted, so
/// the fields add up to the score and a perfect match totals 100.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub tag_match: f64,
    pub location_match: f64,
    pub budget_fit: f64,
    pub rating: f64,
    pub popularity: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.tag_match + self.location_match + self.budget_fit + self.rating + self.popularity
    }
}

/// A venture with the scores computed for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVenture {
    pub venture: Venture,
    pub breakdown: ScoreBreakdown,
    /// Added by collaborative adjustment; zero when no neighbors contributed.
    pub collaborative_boost: f64,
}

impl ScoredVenture {
    pub fn new(venture: Venture, breakdown: ScoreBreakdown) -> Self {
        Self {
            venture,
            breakdown,
            collaborative_boost: 0.0,
        }
    }

    /// Score before collaborative adjustment.
    pub fn content_score(&self) -> f64 {
        self.breakdown.total()
    }

    /// Score used for ranking.
    pub fn score(&self) -> f64 {
        self.content_score() + self.collaborative_boost
    }

    pub fn id(&self) -> &str {
        &self.venture.id
    }
}

impl AsRef<Venture> for ScoredVenture {
    fn as_ref(&self) -> &Venture {
        &self.venture
    }
}

impl From<ScoredVenture> for Venture {
    fn from(scored: ScoredVenture) -> Self {
        scored.venture
    }
}
