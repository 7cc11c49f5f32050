//! # Scoring Crate
//!
//! Turns a venture catalog and a traveller profile into scored ventures.
//!
//! ## Components
//!
//! ### Content scorer
//! Weighted blend of five signals, 100 points in total:
//! - tag/vibe overlap (40)
//! - location match (20)
//! - budget fit (20)
//! - rating (10)
//! - popularity (10)
//!
//! ### Collaborative adjustment
//! Boosts ventures that similar travellers (Jaccard over vibes) booked and
//! rated highly. Optional: no neighbor profiles means pure content scoring.
//!
//! ## Example Usage
//!
//! ```ignore
//! use scoring::{CollaborativeAdjuster, ContentScorer};
//!
//! let scored = ContentScorer.score_all(catalog.ventures(), &profile);
//! let adjusted = CollaborativeAdjuster::new().adjust(scored, &profile, &neighbors);
//! ```
//!
//! Every function here is pure: inputs are borrowed and never modified.

pub mod types;
pub mod budget;
pub mod content;
pub mod similarity;
pub mod collaborative;

// Re-export commonly used types
pub use budget::budget_score;
pub use collaborative::{CollaborativeAdjuster, SimilarNeighbor};
pub use content::ContentScorer;
pub use similarity::{jaccard, profile_similarity};
pub use types::{ScoreBreakdown, ScoredVenture};
