//! Trending selection: what's popular right now.

use catalog::Venture;
use std::collections::HashMap;

/// Ranks ventures by `rating * popularity`, plus a bonus per recent booking.
#[derive(Debug, Clone, Copy)]
pub struct TrendingRanker {
    limit: usize,
    booking_boost: f64,
}

impl Default for TrendingRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendingRanker {
    pub fn new() -> Self {
        Self {
            limit: 6,
            booking_boost: 10.0,
        }
    }

    /// Configure how many trending ventures are returned (default: 6)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Configure the bonus per recent booking (default: 10.0)
    pub fn with_booking_boost(mut self, boost: f64) -> Self {
        self.booking_boost = boost;
        self
    }

    /// Trending score for one venture given `recent_bookings` of its id.
    pub fn score(&self, venture: &Venture, recent_bookings: usize) -> f64 {
        venture.rating * venture.popularity + self.booking_boost * recent_bookings as f64
    }

    /// Ventures with their trending score, best first, cut to the limit.
    ///
    /// Ties keep the order of `ventures`.
    pub fn rank<S: AsRef<str>>(&self, ventures: &[Venture], recent: &[S]) -> Vec<(Venture, f64)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for id in recent {
            *counts.entry(id.as_ref()).or_default() += 1;
        }

        let mut ranked: Vec<(Venture, f64)> = ventures
            .iter()
            .map(|venture| {
                let bookings = counts.get(venture.id.as_str()).copied().unwrap_or(0);
                (venture.clone(), self.score(venture, bookings))
            })
            .collect();

        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(self.limit);
        ranked
    }

    /// Trending ventures, best first.
    pub fn select<S: AsRef<str>>(&self, ventures: &[Venture], recent: &[S]) -> Vec<Venture> {
        self.rank(ventures, recent)
            .into_iter()
            .map(|(venture, _)| venture)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Category;

    fn create_venture(id: &str, rating: f64, popularity: f64) -> Venture {
        Venture {
            id: id.to_string(),
            title: format!("Venture {}", id),
            category: Category::Safari,
            location: "Amboseli".to_string(),
            price: 500.0,
            rating,
            tags: vec![],
            activities: vec![],
            popularity,
            seasonality: vec![],
            description: String::new(),
        }
    }

    #[test]
    fn test_recent_bookings_lift_a_venture() {
        let ventures = vec![
            create_venture("A", 4.0, 50.0),
            create_venture("B", 4.0, 48.0),
        ];
        // B: 192 + 2 * 10 = 212 beats A's 200
        let trending = TrendingRanker::new().select(&ventures, &["B", "B"]);

        let ids: Vec<&str> = trending.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_at_most_six_and_stable_ties() {
        let ventures: Vec<Venture> = (0..8)
            .map(|i| create_venture(&i.to_string(), 4.0, 50.0))
            .collect();
        let none: [&str; 0] = [];

        let trending = TrendingRanker::new().select(&ventures, &none);
        let ids: Vec<&str> = trending.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_unknown_recent_ids_are_ignored() {
        let ventures = vec![create_venture("A", 5.0, 10.0)];
        let ranked = TrendingRanker::new().rank(&ventures, &["ghost"]);
        assert_eq!(ranked[0].1, 50.0);
    }
}
