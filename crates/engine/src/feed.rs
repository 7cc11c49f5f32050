//! Kenya venue feed.
//!
//! Stands in for pulling venues from the tourism boards' sites: waits out a
//! network-like delay, then hands back the built-in Kenya venues in a fresh
//! random order.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{info, instrument};

use catalog::{Catalog, seed};
use pipeline::shuffled;

use crate::config::RecommenderConfig;

/// Sites the venue data is attributed to.
pub const KENYA_TOURISM_SOURCES: [&str; 4] = [
    "https://magicalkenya.com",
    "https://kenyacoastbeach.com",
    "https://maasaimara.com",
    "https://amboselipark.com",
];

#[derive(Debug, Clone)]
pub struct VenueFeed {
    latency: Duration,
    sources: Vec<String>,
}

impl Default for VenueFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl VenueFeed {
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
            sources: KENYA_TOURISM_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn from_config(config: &RecommenderConfig) -> Self {
        Self::new().with_latency(Duration::from_millis(config.feed_latency_ms))
    }

    /// Configure the simulated fetch delay (default: none)
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Fetch the venue catalog, shuffled with `rng`.
    #[instrument(skip(self, rng), fields(latency_ms = self.latency.as_millis() as u64))]
    pub async fn refresh<R>(&self, rng: &mut R) -> Result<Catalog>
    where
        R: Rng + ?Sized,
    {
        let start_time = Instant::now();
        info!("Fetching Kenya venues from {}", self.sources.join(", "));

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let venues = seed::kenya_venues()
            .context("Failed to load Kenya venues")?
            .into_ventures();
        let catalog = Catalog::new(shuffled(venues, rng))
            .context("Venue feed returned an invalid catalog")?;

        info!(
            "Fetched {} venues from {} sources in {:.2?}",
            catalog.len(),
            self.sources.len(),
            start_time.elapsed()
        );
        Ok(catalog)
    }
}
