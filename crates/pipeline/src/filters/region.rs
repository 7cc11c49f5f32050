//! Filter to keep ventures in a region.

use crate::traits::Filter;
use anyhow::Result;
use catalog::{UserProfile, Venture};

/// Keeps ventures whose location contains the region, ignoring case.
pub struct RegionFilter {
    region: String,
}

impl RegionFilter {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }
}

impl Filter for RegionFilter {
    fn name(&self) -> &str {
        "RegionFilter"
    }

    fn apply(&self, ventures: Vec<Venture>, _profile: &UserProfile) -> Result<Vec<Venture>> {
        Ok(ventures
            .into_iter()
            .filter(|venture| venture.in_region(&self.region))
            .collect())
    }
}
