//! Filter to remove ventures the traveller has already booked.
//!
//! Usually the first filter in the pipeline: a repeat booking is rarely
//! what someone is looking for.

use crate::traits::Filter;
use anyhow::Result;
use catalog::{UserProfile, Venture};

/// Removes ventures listed in the profile's past bookings.
pub struct AlreadyBookedFilter;

impl Filter for AlreadyBookedFilter {
    fn name(&self) -> &str {
        "AlreadyBookedFilter"
    }

    fn apply(&self, ventures: Vec<Venture>, profile: &UserProfile) -> Result<Vec<Venture>> {
        let filtered: Vec<Venture> = ventures
            .into_iter()
            .filter(|venture| !profile.has_booked(&venture.id))
            .collect();
        Ok(filtered)
    }
}
