//! Uniform in-place shuffling of digit buffers

use rand::Rng;
use rand::seq::SliceRandom;

/// Replace `digits` with a uniformly random permutation of itself.
///
/// Uses the Fisher-Yates shuffle from `rand`. Empty and single-element slices
/// are left untouched.
pub fn shuffle<R: Rng + ?Sized>(digits: &mut [u8], rng: &mut R) {
    if digits.len() < 2 {
        return;
    }
    digits.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn sorted_copy(digits: &[u8]) -> Vec<u8> {
        let mut v = digits.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let original = b"31415926535897932384".to_vec();
        let mut digits = original.clone();

        for _ in 0..200 {
            shuffle(&mut digits, &mut rng);
            assert_eq!(digits.len(), original.len());
            assert_eq!(sorted_copy(&digits), sorted_copy(&original));
        }
    }

    #[test]
    fn test_repeated_shuffles_stay_permutations() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let original = b"0123456789".to_vec();

        let mut once = original.clone();
        shuffle(&mut once, &mut rng);
        let mut twice = once.clone();
        shuffle(&mut twice, &mut rng);

        assert_eq!(sorted_copy(&once), sorted_copy(&original));
        assert_eq!(sorted_copy(&twice), sorted_copy(&original));
    }

    #[test]
    fn test_shuffle_trivial_inputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = b"7".to_vec();
        shuffle(&mut single, &mut rng);
        assert_eq!(single, b"7");
    }

    #[test]
    fn test_shuffle_same_seed_same_sequence() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let mut x = b"987654321".to_vec();
        let mut y = x.clone();

        for _ in 0..10 {
            shuffle(&mut x, &mut a);
            shuffle(&mut y, &mut b);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_shuffle_covers_all_permutations_evenly() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<u8>, u32> = HashMap::new();
        let trials = 60_000;

        for _ in 0..trials {
            let mut digits = b"123".to_vec();
            shuffle(&mut digits, &mut rng);
            *counts.entry(digits).or_default() += 1;
        }

        // 3! permutations, each expected 10_000 times
        assert_eq!(counts.len(), 6);
        for (perm, count) in &counts {
            assert!(
                (9_000..=11_000).contains(count),
                "permutation {:?} seen {} times",
                perm,
                count
            );
        }
    }
}
