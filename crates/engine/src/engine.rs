//! # Recommendation Engine
//!
//! Coordinates the whole recommendation flow:
//! 1. Filter the catalog (only in [`RecommendationEngine::recommend`])
//! 2. Content-score every venture against the profile
//! 3. Boost ventures that similar travellers loved
//! 4. Rank, pool, shuffle, and select
//!
//! Diversification and trending are separate entry points that work on
//! their own inputs.
//!
//! The engine holds no catalog. Callers pass ventures in on every call, so
//! one engine can serve any number of catalogs from any number of threads.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, info, instrument};

use catalog::{UserProfile, Venture};
use pipeline::{Diversifier, FilterPipeline, Ranker, TrendingRanker};
use scoring::{CollaborativeAdjuster, ContentScorer, ScoredVenture};

use crate::config::RecommenderConfig;

/// Main engine that ties scoring, ranking, and re-picking together.
#[derive(Clone)]
pub struct RecommendationEngine {
    config: RecommenderConfig,
    scorer: ContentScorer,
    adjuster: CollaborativeAdjuster,
    ranker: Ranker,
    diversifier: Diversifier,
    trending: TrendingRanker,
    filter_pipeline: Arc<FilterPipeline>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Engine with default settings and no filters.
    pub fn new() -> Self {
        Self::build(RecommenderConfig::default())
    }

    /// Engine configured from a validated [`RecommenderConfig`].
    pub fn from_config(config: RecommenderConfig) -> Result<Self> {
        config.validate().context("Invalid recommender config")?;
        Ok(Self::build(config))
    }

    fn build(config: RecommenderConfig) -> Self {
        Self {
            scorer: ContentScorer,
            adjuster: config.adjuster(),
            ranker: config.ranker(),
            diversifier: config.diversifier(),
            trending: config.trending(),
            filter_pipeline: Arc::new(FilterPipeline::new()),
            config,
        }
    }

    /// Filters applied by [`RecommendationEngine::recommend`] before scoring.
    pub fn with_filters(mut self, pipeline: FilterPipeline) -> Self {
        self.filter_pipeline = Arc::new(pipeline);
        self
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Content scores plus collaborative boosts, in catalog order.
    pub fn score_catalog(
        &self,
        ventures: &[Venture],
        profile: &UserProfile,
        neighbors: &[UserProfile],
    ) -> Vec<ScoredVenture> {
        let scored = self.scorer.score_all(ventures, profile);
        self.adjuster.adjust(scored, profile, neighbors)
    }

    /// The ranked, unshuffled pool that a request for `count` draws from.
    pub fn candidate_pool(
        &self,
        ventures: &[Venture],
        profile: &UserProfile,
        neighbors: &[UserProfile],
        count: usize,
    ) -> Vec<ScoredVenture> {
        let scored = self.score_catalog(ventures, profile, neighbors);
        self.ranker.candidate_pool(scored, count)
    }

    /// Up to `count` recommendations drawn from the top `pool_multiplier * count`.
    ///
    /// The result never holds duplicates. With `count` above the catalog size
    /// the whole catalog comes back shuffled. Callers without a count of their
    /// own use [`RecommendationEngine::generate_default_recommendations`],
    /// which takes it from [`RecommenderConfig::default_count`] (10).
    #[instrument(
        skip(self, ventures, profile, neighbors, rng),
        fields(ventures = ventures.len(), neighbors = neighbors.len())
    )]
    pub fn generate_recommendations<R>(
        &self,
        ventures: &[Venture],
        profile: &UserProfile,
        neighbors: &[UserProfile],
        count: usize,
        rng: &mut R,
    ) -> Vec<ScoredVenture>
    where
        R: Rng + ?Sized,
    {
        let start_time = Instant::now();

        let scored = self.score_catalog(ventures, profile, neighbors);
        let picks = self.ranker.select(scored, count, rng);

        info!(
            "Selected {} recommendations in {:.2?}",
            picks.len(),
            start_time.elapsed()
        );
        picks
    }

    /// [`RecommendationEngine::generate_recommendations`] with the configured
    /// `default_count`.
    pub fn generate_default_recommendations<R>(
        &self,
        ventures: &[Venture],
        profile: &UserProfile,
        neighbors: &[UserProfile],
        rng: &mut R,
    ) -> Vec<ScoredVenture>
    where
        R: Rng + ?Sized,
    {
        let count = self.config.default_count;
        self.generate_recommendations(ventures, profile, neighbors, count, rng)
    }

    /// Like [`RecommendationEngine::generate_recommendations`], after running
    /// the engine's filter pipeline over the catalog.
    #[instrument(
        skip(self, ventures, profile, neighbors, rng),
        fields(ventures = ventures.len(), filters = self.filter_pipeline.len())
    )]
    pub fn recommend<R>(
        &self,
        ventures: &[Venture],
        profile: &UserProfile,
        neighbors: &[UserProfile],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<ScoredVenture>>
    where
        R: Rng + ?Sized,
    {
        let candidates = self
            .filter_pipeline
            .apply(ventures.to_vec(), profile)
            .context("Failed to apply filters")?;
        info!(
            "Filtering complete, {} of {} ventures remain",
            candidates.len(),
            ventures.len()
        );

        Ok(self.generate_recommendations(&candidates, profile, neighbors, count, rng))
    }

    /// Spread a ranked list over categories and locations.
    pub fn diversify_recommendations<T>(&self, ranked: &[T]) -> Vec<T>
    where
        T: AsRef<Venture> + Clone,
    {
        self.diversifier.diversify(ranked)
    }

    /// What's hot: rating times popularity, plus a bonus per recent booking.
    pub fn trending_ventures<S: AsRef<str>>(
        &self,
        ventures: &[Venture],
        recent: &[S],
    ) -> Vec<Venture> {
        let trending = self.trending.select(ventures, recent);
        debug!(
            "{} trending ventures from {} recent bookings",
            trending.len(),
            recent.len()
        );
        trending
    }

    /// Trending ventures together with their trending scores.
    pub fn trending_scores<S: AsRef<str>>(
        &self,
        ventures: &[Venture],
        recent: &[S],
    ) -> Vec<(Venture, f64)> {
        self.trending.rank(ventures, recent)
    }

    /// Score breakdown for a single venture, or `None` if the id is unknown.
    pub fn explain(
        &self,
        ventures: &[Venture],
        profile: &UserProfile,
        neighbors: &[UserProfile],
        id: &str,
    ) -> Option<ScoredVenture> {
        let venture = ventures.iter().find(|v| v.id == id)?;
        self.score_catalog(std::slice::from_ref(venture), profile, neighbors)
            .into_iter()
            .next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::seed::{sample_neighbors, sample_profile, venture_packs};
    use catalog::{BudgetTier, Category};
    use pipeline::filters::{AlreadyBookedFilter, CategoryFilter};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn create_venture(id: &str, category: Category, location: &str, rating: f64) -> Venture {
        Venture {
            id: id.to_string(),
            title: format!("Venture {}", id),
            category,
            location: location.to_string(),
            price: 150.0,
            rating,
            tags: vec!["Romantic".to_string()],
            activities: vec![],
            popularity: 50.0,
            seasonality: vec![],
            description: String::new(),
        }
    }

    fn build_test_catalog() -> Vec<Venture> {
        venture_packs().unwrap().into_ventures()
    }

    // ============================================================================
    // Tests
    // ============================================================================

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<RecommendationEngine>();
    }

    #[test]
    fn test_generate_never_exceeds_count_or_repeats() {
        let engine = RecommendationEngine::new();
        let ventures = build_test_catalog();
        let profile = sample_profile().unwrap();
        let neighbors = sample_neighbors().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for count in [0, 1, 5, 10, 12, 50] {
            let picks =
                engine.generate_recommendations(&ventures, &profile, &neighbors, count, &mut rng);
            assert_eq!(picks.len(), count.min(ventures.len()));

            let ids: HashSet<&str> = picks.iter().map(|s| s.id()).collect();
            assert_eq!(ids.len(), picks.len());
        }
    }

    #[test]
    fn test_default_count_is_ten() {
        let engine = RecommendationEngine::new();
        let ventures = build_test_catalog();
        let profile = sample_profile().unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        assert!(ventures.len() > 10);
        let picks = engine.generate_default_recommendations(&ventures, &profile, &[], &mut rng);
        assert_eq!(picks.len(), 10);

        let config = RecommenderConfig {
            default_count: 3,
            ..RecommenderConfig::default()
        };
        let engine = RecommendationEngine::from_config(config).unwrap();
        let picks = engine.generate_default_recommendations(&ventures, &profile, &[], &mut rng);
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_two_runs_share_the_pool() {
        let engine = RecommendationEngine::new();
        let ventures = build_test_catalog();
        let profile = sample_profile().unwrap();

        let pool: HashSet<String> = engine
            .candidate_pool(&ventures, &profile, &[], 4)
            .into_iter()
            .map(|s| s.venture.id)
            .collect();
        assert_eq!(pool.len(), 8);

        for seed in [1, 2] {
            let picks = engine.generate_recommendations(
                &ventures,
                &profile,
                &[],
                4,
                &mut StdRng::seed_from_u64(seed),
            );
            assert!(picks.iter().all(|s| pool.contains(s.id())));
        }
    }

    #[test]
    fn test_empty_catalog() {
        let engine = RecommendationEngine::new();
        let picks = engine.generate_recommendations(
            &[],
            &UserProfile::new(),
            &[],
            10,
            &mut StdRng::seed_from_u64(0),
        );
        assert!(picks.is_empty());
    }

    #[test]
    fn test_generate_ignores_filters_recommend_applies_them() {
        let engine = RecommendationEngine::new().with_filters(
            FilterPipeline::new()
                .add_filter(AlreadyBookedFilter)
                .add_filter(CategoryFilter::new([Category::Adventure])),
        );
        let ventures = build_test_catalog();
        let profile = sample_profile().unwrap();

        let unfiltered = engine.generate_recommendations(
            &ventures,
            &profile,
            &[],
            12,
            &mut StdRng::seed_from_u64(3),
        );
        assert_eq!(unfiltered.len(), 12);

        let filtered = engine
            .recommend(&ventures, &profile, &[], 12, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|s| s.venture.category == Category::Adventure));
    }

    #[test]
    fn test_neighbor_boost_lifts_their_favourite() {
        let engine = RecommendationEngine::new();
        let ventures = vec![
            create_venture("a", Category::Beach, "Diani", 5.0),
            create_venture("b", Category::Beach, "Diani", 4.0),
        ];
        let profile = UserProfile::new()
            .with_vibes(["Romantic"])
            .with_budget_tier(BudgetTier::MidRange);
        let neighbor = UserProfile::new().with_vibes(["Romantic"]).with_booking("b", 5);

        let plain = engine.score_catalog(&ventures, &profile, &[]);
        assert!(plain[0].score() > plain[1].score());

        let boosted = engine.score_catalog(&ventures, &profile, &[neighbor]);
        assert!(boosted[1].score() > boosted[0].score());
        assert_eq!(boosted[1].collaborative_boost, 10.0);
    }

    #[test]
    fn test_diversify_and_trending_limits() {
        let engine = RecommendationEngine::new();
        let ventures = build_test_catalog();
        let profile = sample_profile().unwrap();

        let ranked = engine.candidate_pool(&ventures, &profile, &[], 50);
        assert_eq!(engine.diversify_recommendations(&ranked).len(), 10);
        assert_eq!(engine.diversify_recommendations(&ventures).len(), 10);

        let trending = engine.trending_scores(&ventures, &["3"]);
        assert_eq!(trending.len(), 6);
        assert!(trending.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_config_drives_components() {
        let config = RecommenderConfig {
            trending_limit: 2,
            diversify_limit: 4,
            diversify_category_slots: 4,
            ..RecommenderConfig::default()
        };
        let engine = RecommendationEngine::from_config(config).unwrap();
        let ventures = build_test_catalog();

        assert_eq!(engine.trending_ventures(&ventures, &[] as &[&str]).len(), 2);
        assert_eq!(engine.diversify_recommendations(&ventures).len(), 4);

        let invalid = RecommenderConfig {
            pool_multiplier: 0,
            ..RecommenderConfig::default()
        };
        assert!(RecommendationEngine::from_config(invalid).is_err());
    }

    #[test]
    fn test_explain_matches_scored_catalog() {
        let engine = RecommendationEngine::new();
        let ventures = build_test_catalog();
        let profile = sample_profile().unwrap();

        let explained = engine.explain(&ventures, &profile, &[], "7").unwrap();
        let scored = engine.score_catalog(&ventures, &profile, &[]);
        let expected = scored.iter().find(|s| s.id() == "7").unwrap();

        assert_eq!(explained.breakdown, expected.breakdown);
        assert!(engine.explain(&ventures, &profile, &[], "missing").is_none());
    }
}
