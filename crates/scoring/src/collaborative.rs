//! Collaborative adjustment
//!
//! "Travellers with your taste loved these":
//!
//! ## Algorithm
//! 1. Compare the traveller's vibes with every neighbor profile (Jaccard)
//! 2. Keep neighbors above the similarity threshold, most similar first,
//!    at most `max_neighbors` of them
//! 3. For each kept neighbor, every venture they booked and rated at least
//!    `min_rating` gets `similarity * boost_weight` added to its score
//!
//! With no neighbors the scores pass through untouched.

use crate::similarity::profile_similarity;
use crate::types::ScoredVenture;
use catalog::UserProfile;
use tracing::{debug, instrument};

/// A neighbor profile together with how similar it is to the traveller.
#[derive(Debug, Clone, Copy)]
pub struct SimilarNeighbor<'a> {
    pub profile: &'a UserProfile,
    pub similarity: f64,
}

/// Boosts ventures that similar travellers booked and rated highly.
#[derive(Debug, Clone, Copy)]
pub struct CollaborativeAdjuster {
    /// Neighbors must be strictly more similar than this
    similarity_threshold: f64,

    /// How many of the most similar neighbors to consult
    max_neighbors: usize,

    /// Lowest star rating that counts as "loved it"
    min_rating: u8,

    /// Boost for a perfectly similar neighbor
    boost_weight: f64,
}

impl Default for CollaborativeAdjuster {
    fn default() -> Self {
        Self::new()
    }
}

impl CollaborativeAdjuster {
    pub fn new() -> Self {
        Self {
            similarity_threshold: 0.3,
            max_neighbors: 5,
            min_rating: 4,
            boost_weight: 10.0,
        }
    }

    /// Configure the similarity threshold (default: 0.3)
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Configure how many neighbors are consulted (default: 5)
    pub fn with_max_neighbors(mut self, max: usize) -> Self {
        self.max_neighbors = max;
        self
    }

    /// Configure the lowest rating that earns a boost (default: 4)
    pub fn with_min_rating(mut self, rating: u8) -> Self {
        self.min_rating = rating;
        self
    }

    /// Configure the boost per unit of similarity (default: 10.0)
    pub fn with_boost_weight(mut self, weight: f64) -> Self {
        self.boost_weight = weight;
        self
    }

    /// Neighbors worth listening to, most similar first.
    ///
    /// Equal similarities keep the order the neighbors were given in.
    pub fn similar_neighbors<'a>(
        &self,
        profile: &UserProfile,
        neighbors: &'a [UserProfile],
    ) -> Vec<SimilarNeighbor<'a>> {
        let mut similar: Vec<SimilarNeighbor<'a>> = neighbors
            .iter()
            .map(|neighbor| SimilarNeighbor {
                profile: neighbor,
                similarity: profile_similarity(profile, neighbor),
            })
            .filter(|n| n.similarity > self.similarity_threshold)
            .collect();

        similar.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        similar.truncate(self.max_neighbors);
        similar
    }

    /// Boost one venture would receive from a set of similar neighbors.
    pub fn boost_for(&self, venture_id: &str, similar: &[SimilarNeighbor<'_>]) -> f64 {
        similar
            .iter()
            .filter(|n| {
                n.profile.has_booked(venture_id)
                    && n.profile
                        .rating_for(venture_id)
                        .is_some_and(|stars| stars >= self.min_rating)
            })
            .map(|n| n.similarity * self.boost_weight)
            .sum()
    }

    /// Apply neighbor boosts to freshly scored ventures.
    #[instrument(skip_all, fields(ventures = scored.len(), neighbors = neighbors.len()))]
    pub fn adjust(
        &self,
        mut scored: Vec<ScoredVenture>,
        profile: &UserProfile,
        neighbors: &[UserProfile],
    ) -> Vec<ScoredVenture> {
        if neighbors.is_empty() {
            return scored;
        }

        let similar = self.similar_neighbors(profile, neighbors);
        debug!("Found {} similar neighbors", similar.len());
        if similar.is_empty() {
            return scored;
        }

        let mut boosted = 0usize;
        for item in scored.iter_mut() {
            let boost = self.boost_for(&item.venture.id, &similar);
            if boost > 0.0 {
                boosted += 1;
            }
            item.collaborative_boost += boost;
        }
        debug!("Boosted {} ventures from neighbor bookings", boosted);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentScorer;
    use catalog::{Category, Venture};

    fn create_venture(id: &str) -> Venture {
        Venture {
            id: id.to_string(),
            title: format!("Venture {}", id),
            category: Category::Beach,
            location: "Diani".to_string(),
            price: 100.0,
            rating: 4.0,
            tags: vec!["Beach".to_string()],
            activities: vec![],
            popularity: 50.0,
            seasonality: vec![],
            description: String::new(),
        }
    }

    fn create_scored(ids: &[&str], profile: &UserProfile) -> Vec<ScoredVenture> {
        let ventures: Vec<Venture> = ids.iter().map(|id| create_venture(id)).collect();
        ContentScorer.score_all(&ventures, profile)
    }

    #[test]
    fn test_no_neighbors_is_pure_content() {
        let profile = UserProfile::new().with_vibes(["Beach"]);
        let scored = create_scored(&["1", "2"], &profile);
        let expected = scored.clone();

        let adjusted = CollaborativeAdjuster::new().adjust(scored, &profile, &[]);
        assert_eq!(adjusted, expected);
    }

    #[test]
    fn test_similar_neighbor_boosts_highly_rated_booking() {
        let profile = UserProfile::new().with_vibes(["Romantic", "Beach"]);
        // similarity 1.0
        let neighbor = UserProfile::new()
            .with_vibes(["Beach", "Romantic"])
            .with_booking("2", 5)
            .with_booking("3", 3);

        let scored = create_scored(&["1", "2", "3"], &profile);
        let adjusted = CollaborativeAdjuster::new().adjust(scored, &profile, &[neighbor]);

        assert_eq!(adjusted[0].collaborative_boost, 0.0);
        assert_eq!(adjusted[1].collaborative_boost, 10.0);
        // rated 3: below the bar
        assert_eq!(adjusted[2].collaborative_boost, 0.0);
        assert_eq!(adjusted[1].score(), adjusted[1].content_score() + 10.0);
    }

    #[test]
    fn test_rating_without_booking_is_ignored() {
        let profile = UserProfile::new().with_vibes(["Beach"]);
        let mut neighbor = UserProfile::new().with_vibes(["Beach"]);
        neighbor.ratings.insert("1".to_string(), 5);

        let scored = create_scored(&["1"], &profile);
        let adjusted = CollaborativeAdjuster::new().adjust(scored, &profile, &[neighbor]);
        assert_eq!(adjusted[0].collaborative_boost, 0.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let adjuster = CollaborativeAdjuster::new();
        let profile = UserProfile::new().with_vibes(["A", "B", "C"]);
        // 2 shared of 3 = 0.667 passes; 1 shared of 4 = 0.25 does not
        let close = UserProfile::new().with_vibes(["A", "B"]).with_booking("1", 5);
        let far = UserProfile::new().with_vibes(["A", "D"]).with_booking("1", 5);

        let neighbors = vec![close, far];
        let similar = adjuster.similar_neighbors(&profile, &neighbors);
        assert_eq!(similar.len(), 1);
        assert!((similar[0].similarity - 2.0 / 3.0).abs() < 1e-12);

        let edge = adjuster.with_similarity_threshold(2.0 / 3.0);
        assert!(edge.similar_neighbors(&profile, &neighbors).is_empty());
    }

    #[test]
    fn test_at_most_five_neighbors_most_similar_first() {
        let profile = UserProfile::new().with_vibes(["A", "B"]);
        let mut neighbors: Vec<UserProfile> = (0..6)
            .map(|_| UserProfile::new().with_vibes(["A", "C"]))
            .collect();
        neighbors.push(UserProfile::new().with_vibes(["A", "B"]));

        let similar = CollaborativeAdjuster::new().similar_neighbors(&profile, &neighbors);
        assert_eq!(similar.len(), 5);
        assert_eq!(similar[0].similarity, 1.0);
        assert!(std::ptr::eq(similar[0].profile, &neighbors[6]));
        assert!(std::ptr::eq(similar[1].profile, &neighbors[0]));
    }

    #[test]
    fn test_boosts_accumulate_across_neighbors() {
        let profile = UserProfile::new().with_vibes(["Beach"]);
        let a = UserProfile::new().with_vibes(["Beach"]).with_booking("1", 4);
        let b = UserProfile::new()
            .with_vibes(["Beach", "Safari"])
            .with_booking("1", 5);

        let scored = create_scored(&["1"], &profile);
        let adjusted = CollaborativeAdjuster::new().adjust(scored, &profile, &[a, b]);
        // 1.0 * 10 + 0.5 * 10
        assert!((adjusted[0].collaborative_boost - 15.0).abs() < 1e-12);
    }
}
