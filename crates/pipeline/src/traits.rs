//! Core traits for the filtering pipeline.
//!
//! Filters narrow a catalog before it is scored, e.g. "only ventures in
//! Nairobi" or "nothing I have already booked".

use anyhow::Result;
use catalog::{UserProfile, Venture};

/// Core trait for filtering ventures.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// - `Send + Sync` lets a pipeline be shared by an engine used across threads
/// - Filters take ownership of the Vec<Venture> and return the survivors,
///   so the caller's catalog is never touched
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of ventures.
    ///
    /// # Arguments
    /// * `ventures` - The ventures to filter (takes ownership)
    /// * `profile` - The traveller the request is for
    ///
    /// # Returns
    /// * `Ok(Vec<Venture>)` - The ventures that passed, in their original order
    /// * `Err` - If the filter is misconfigured
    fn apply(&self, ventures: Vec<Venture>, profile: &UserProfile) -> Result<Vec<Venture>>;
}
