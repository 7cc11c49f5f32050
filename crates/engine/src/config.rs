//! Engine configuration.
//!
//! Every knob has a default, so a config file only needs the keys it changes:
//!
//! ```json
//! { "pool_multiplier": 3, "diversify_limit": 8 }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use pipeline::{Diversifier, Ranker, TrendingRanker};
use scoring::CollaborativeAdjuster;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Candidate pool size as a multiple of the requested count
    pub pool_multiplier: usize,

    /// Neighbors must be strictly more similar than this (0-1)
    pub similarity_threshold: f64,
    pub max_neighbors: usize,
    /// Lowest neighbor rating that earns a boost
    pub min_neighbor_rating: u8,
    /// Boost per unit of neighbor similarity
    pub neighbor_boost: f64,

    pub diversify_limit: usize,
    pub diversify_free_slots: usize,
    pub diversify_category_slots: usize,

    pub trending_limit: usize,
    pub trending_booking_boost: f64,

    /// Recommendations returned when the caller doesn't ask for a number
    pub default_count: usize,

    /// Simulated venue feed delay, in milliseconds
    pub feed_latency_ms: u64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            pool_multiplier: 2,
            similarity_threshold: 0.3,
            max_neighbors: 5,
            min_neighbor_rating: 4,
            neighbor_boost: 10.0,
            diversify_limit: 10,
            diversify_free_slots: 3,
            diversify_category_slots: 7,
            trending_limit: 6,
            trending_booking_boost: 10.0,
            default_count: 10,
            feed_latency_ms: 0,
        }
    }
}

impl RecommenderConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.pool_multiplier >= 1, "pool_multiplier must be at least 1");
        ensure!(
            (0.0..=1.0).contains(&self.similarity_threshold),
            "similarity_threshold must be within 0..=1, got {}",
            self.similarity_threshold
        );
        ensure!(
            self.diversify_free_slots <= self.diversify_category_slots
                && self.diversify_category_slots <= self.diversify_limit,
            "diversify slots must satisfy free ({}) <= category ({}) <= limit ({})",
            self.diversify_free_slots,
            self.diversify_category_slots,
            self.diversify_limit
        );
        ensure!(
            self.neighbor_boost.is_finite() && self.trending_booking_boost.is_finite(),
            "boost weights must be finite"
        );
        Ok(())
    }

    pub fn adjuster(&self) -> CollaborativeAdjuster {
        CollaborativeAdjuster::new()
            .with_similarity_threshold(self.similarity_threshold)
            .with_max_neighbors(self.max_neighbors)
            .with_min_rating(self.min_neighbor_rating)
            .with_boost_weight(self.neighbor_boost)
    }

    pub fn ranker(&self) -> Ranker {
        Ranker::new().with_pool_multiplier(self.pool_multiplier)
    }

    pub fn diversifier(&self) -> Diversifier {
        Diversifier::new()
            .with_limit(self.diversify_limit)
            .with_free_slots(self.diversify_free_slots)
            .with_category_slots(self.diversify_category_slots)
    }

    pub fn trending(&self) -> TrendingRanker {
        TrendingRanker::new()
            .with_limit(self.trending_limit)
            .with_booking_boost(self.trending_booking_boost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_defaults_are_valid() {
        let config = RecommenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pool_multiplier, 2);
        assert_eq!(config.diversify_limit, 10);
        assert_eq!(config.trending_limit, 6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: RecommenderConfig =
            serde_json::from_str(r#"{ "pool_multiplier": 3, "trending_limit": 4 }"#).unwrap();

        assert_eq!(config.pool_multiplier, 3);
        assert_eq!(config.trending_limit, 4);
        assert_eq!(config.max_neighbors, 5);
        assert_eq!(config.neighbor_boost, 10.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let zero_pool = RecommenderConfig {
            pool_multiplier: 0,
            ..RecommenderConfig::default()
        };
        assert!(zero_pool.validate().is_err());

        let slots = RecommenderConfig {
            diversify_free_slots: 8,
            ..RecommenderConfig::default()
        };
        assert!(slots.validate().is_err());

        let threshold = RecommenderConfig {
            similarity_threshold: 1.5,
            ..RecommenderConfig::default()
        };
        assert!(threshold.validate().is_err());
    }

    #[test]
    fn test_from_path() {
        let path = env::temp_dir().join(format!("venture-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "default_count": 4 }"#).unwrap();

        let config = RecommenderConfig::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.default_count, 4);
        assert!(RecommenderConfig::from_path(Path::new("/nonexistent/config.json")).is_err());
    }
}
