//! Serendipity shuffle.
//!
//! A plain Fisher–Yates shuffle. The random source is always supplied by the
//! caller so a seeded generator reproduces the same order.

use rand::Rng;

/// Shuffle `items` in place.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen slot in `0..=i`. Every permutation is equally likely given a
/// uniform generator.
pub fn fisher_yates<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Owned variant of [`fisher_yates`]: returns the shuffled vector.
pub fn shuffled<T, R>(mut items: Vec<T>, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    fisher_yates(&mut items, rng);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_empty_and_single_are_untouched() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut empty: Vec<u32> = vec![];
        fisher_yates(&mut empty, &mut rng);
        assert!(empty.is_empty());

        assert_eq!(shuffled(vec![42], &mut rng), vec![42]);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut items: Vec<u32> = (0..50).collect();
        fisher_yates(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = shuffled((0..20).collect::<Vec<u32>>(), &mut StdRng::seed_from_u64(3));
        let b = shuffled((0..20).collect::<Vec<u32>>(), &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_permutations_are_roughly_uniform() {
        // 3 items have 6 permutations; 6000 draws puts ~1000 in each
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..6000 {
            *counts.entry(shuffled(vec![0u8, 1, 2], &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for (permutation, count) in &counts {
            assert!(
                (800..=1200).contains(count),
                "{:?} drawn {} times",
                permutation,
                count
            );
        }
    }
}
