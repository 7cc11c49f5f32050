//! The FilterPipeline chains filters together using the builder pattern.

use crate::traits::Filter;
use anyhow::Result;
use catalog::{UserProfile, Venture};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AlreadyBookedFilter)
///     .add_filter(RegionFilter::new("Nairobi"))
///     .add_filter(MaxPriceFilter::new(150.0));
///
/// let filtered = pipeline.apply(catalog.ventures().to_vec(), &profile)?;
/// ```
#[derive(Default)]
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Filter names in application order.
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence, stopping at the first error.
    pub fn apply(&self, ventures: Vec<Venture>, profile: &UserProfile) -> Result<Vec<Venture>> {
        let mut current = ventures;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, profile)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}
