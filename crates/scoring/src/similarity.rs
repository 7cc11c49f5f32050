//! Traveller-to-traveller similarity.

use catalog::UserProfile;
use std::collections::HashSet;

/// Jaccard index of two label sets: `|A ∩ B| / |A ∪ B|`.
///
/// Duplicate labels count once. Two empty sets have similarity 0.
pub fn jaccard<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let a: HashSet<&str> = a.iter().map(|s| s.as_ref()).collect();
    let b: HashSet<&str> = b.iter().map(|s| s.as_ref()).collect();

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

/// Similarity of two travellers, judged on their vibes.
pub fn profile_similarity(a: &UserProfile, b: &UserProfile) -> f64 {
    jaccard(&a.vibes, &b.vibes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_empty_is_zero() {
        let empty: [&str; 0] = [];
        let similarity = jaccard(&empty, &empty);
        assert_eq!(similarity, 0.0);
        assert!(!similarity.is_nan());
    }

    #[test]
    fn test_identical_sets() {
        assert_eq!(jaccard(&["Romantic", "Beach"], &["Beach", "Romantic"]), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        // {Romantic, Adventure} vs {Adventure, Nature}: 1 shared of 3
        let similarity = jaccard(&["Romantic", "Adventure"], &["Adventure", "Nature"]);
        assert!((similarity - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_duplicates_count_once() {
        let similarity = jaccard(&["Beach", "Beach", "Beach"], &["Beach", "Safari"]);
        assert_eq!(similarity, 0.5);
    }

    #[test]
    fn test_profile_similarity_uses_vibes() {
        let a = UserProfile::new()
            .with_vibes(["Romantic", "Beach"])
            .with_locations(["Diani"]);
        let b = UserProfile::new().with_vibes(["Beach"]).with_locations(["Diani"]);
        assert_eq!(profile_similarity(&a, &b), 0.5);
    }
}
