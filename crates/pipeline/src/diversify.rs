//! Diversification pass
//!
//! Re-picks a ranked list so one category or one town can't take over the
//! whole page.
//!
//! ## Algorithm
//! Walk the list in order:
//! - the first `free_slots` items are admitted as they come
//! - after that, an unseen category is admitted while fewer than
//!   `category_slots` are in
//! - an unseen location is admitted while fewer than `limit` are in
//!
//! Whatever room is left is backfilled from the skipped items, in order.

use catalog::{Category, Venture};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct Diversifier {
    limit: usize,
    free_slots: usize,
    category_slots: usize,
}

impl Default for Diversifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Diversifier {
    pub fn new() -> Self {
        Self {
            limit: 10,
            free_slots: 3,
            category_slots: 7,
        }
    }

    /// Configure the output length (default: 10)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Configure how many leading items are admitted unconditionally (default: 3)
    pub fn with_free_slots(mut self, slots: usize) -> Self {
        self.free_slots = slots;
        self
    }

    /// Configure how long new categories alone earn a slot (default: 7)
    pub fn with_category_slots(mut self, slots: usize) -> Self {
        self.category_slots = slots;
        self
    }

    /// Diversify a ranked list of ventures or scored ventures.
    pub fn diversify<T>(&self, ranked: &[T]) -> Vec<T>
    where
        T: AsRef<Venture> + Clone,
    {
        let mut output: Vec<T> = Vec::with_capacity(self.limit.min(ranked.len()));
        let mut admitted = vec![false; ranked.len()];
        let mut seen_categories: HashSet<Category> = HashSet::new();
        let mut seen_locations: HashSet<&str> = HashSet::new();

        for (position, item) in ranked.iter().enumerate() {
            let venture = item.as_ref();
            let taken = output.len();
            if taken >= self.limit {
                break;
            }

            let admit = taken < self.free_slots
                || (taken < self.category_slots && !seen_categories.contains(&venture.category))
                || !seen_locations.contains(venture.location.as_str());

            if admit {
                seen_categories.insert(venture.category);
                seen_locations.insert(venture.location.as_str());
                admitted[position] = true;
                output.push(item.clone());
            }
        }

        let diverse = output.len();
        let room = self.limit.saturating_sub(diverse);
        output.extend(
            ranked
                .iter()
                .zip(admitted)
                .filter(|(_, was_admitted)| !was_admitted)
                .map(|(item, _)| item.clone())
                .take(room),
        );

        debug!(
            "Diversified {} ranked into {} ({} backfilled)",
            ranked.len(),
            output.len(),
            output.len() - diverse
        );
        output
    }
}
