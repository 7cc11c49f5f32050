//! Filter to drop ventures above a price ceiling.

use crate::traits::Filter;
use anyhow::{Result, ensure};
use catalog::{UserProfile, Venture};

/// Keeps ventures priced at or below `max_price`.
pub struct MaxPriceFilter {
    max_price: f64,
}

impl MaxPriceFilter {
    pub fn new(max_price: f64) -> Self {
        Self { max_price }
    }
}

impl Filter for MaxPriceFilter {
    fn name(&self) -> &str {
        "MaxPriceFilter"
    }

    fn apply(&self, ventures: Vec<Venture>, _profile: &UserProfile) -> Result<Vec<Venture>> {
        ensure!(
            self.max_price.is_finite() && self.max_price >= 0.0,
            "max price must be a non-negative number, got {}",
            self.max_price
        );

        Ok(ventures
            .into_iter()
            .filter(|venture| venture.price <= self.max_price)
            .collect())
    }
}
