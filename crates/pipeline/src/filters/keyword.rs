//! Filter to keep ventures mentioning a keyword.

use crate::traits::Filter;
use anyhow::Result;
use catalog::{UserProfile, Venture};

/// Keeps ventures whose title, description, or activities mention the query.
pub struct KeywordFilter {
    query: String,
}

impl KeywordFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl Filter for KeywordFilter {
    fn name(&self) -> &str {
        "KeywordFilter"
    }

    fn apply(&self, ventures: Vec<Venture>, _profile: &UserProfile) -> Result<Vec<Venture>> {
        Ok(ventures
            .into_iter()
            .filter(|venture| venture.matches_keyword(&self.query))
            .collect())
    }
}
