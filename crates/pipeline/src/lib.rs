//! Pipeline for filtering, ranking, and re-picking scored ventures.
//!
//! This crate provides:
//! - Filter trait and implementations for narrowing a catalog
//! - FilterPipeline for composing filters
//! - Ranker: stable ranking plus the serendipity shuffle over a candidate pool
//! - Diversifier: category/location spread over a ranked list
//! - TrendingRanker: popularity plus recent bookings
//!
//! ## Architecture
//! A recommendation request flows through these stages:
//! 1. Filters remove unwanted ventures (already booked, over budget, wrong region)
//! 2. The scoring crate scores what is left
//! 3. Ranker sorts, pools, shuffles, and cuts to the requested count
//! 4. Optionally, Diversifier spreads the result across categories and towns
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::filters::*;
//! use pipeline::{Diversifier, FilterPipeline, Ranker};
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(AlreadyBookedFilter)
//!     .add_filter(MaxPriceFilter::new(300.0));
//! let candidates = pipeline.apply(catalog.ventures().to_vec(), &profile)?;
//!
//! let scored = ContentScorer.score_all(&candidates, &profile);
//! let picks = Ranker::new().select(scored, 10, &mut rng);
//! let spread = Diversifier::new().diversify(&picks);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod shuffle;
pub mod ranking;
pub mod diversify;
pub mod trending;

// Re-export main types
pub use diversify::Diversifier;
pub use filter_pipeline::FilterPipeline;
pub use ranking::Ranker;
pub use shuffle::{fisher_yates, shuffled};
pub use traits::Filter;
pub use trending::TrendingRanker;
