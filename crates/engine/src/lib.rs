//! Engine crate for the venture recommender.
//!
//! Wires the catalog, scoring, and pipeline crates into one
//! [`RecommendationEngine`], plus its configuration and the simulated
//! Kenya venue feed.

pub mod config;
pub mod engine;
pub mod feed;

pub use config::RecommenderConfig;
pub use engine::RecommendationEngine;
pub use feed::{KENYA_TOURISM_SOURCES, VenueFeed};
