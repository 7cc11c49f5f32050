//! Filter to keep ventures suited to the traveller's occasions.

use crate::traits::Filter;
use anyhow::Result;
use catalog::{UserProfile, Venture};

/// Keeps ventures whose category suits any occasion in the profile.
///
/// Profiles without a recognised occasion pass everything through.
pub struct OccasionFilter;

impl Filter for OccasionFilter {
    fn name(&self) -> &str {
        "OccasionFilter"
    }

    fn apply(&self, ventures: Vec<Venture>, profile: &UserProfile) -> Result<Vec<Venture>> {
        let occasions = profile.occasions();
        if occasions.is_empty() {
            return Ok(ventures);
        }

        Ok(ventures
            .into_iter()
            .filter(|venture| occasions.iter().any(|&o| venture.suits_occasion(o)))
            .collect())
    }
}
