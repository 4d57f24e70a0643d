//! Hash-keyed deterministic shuffle.
//!
//! Each item is keyed by the SHA-256 hex digest of `"{seed}:{position}"` and
//! the items are stably sorted by that hex string. The same seed always gives
//! the same permutation, so the shuffle is reproducible across runs and
//! implementations.

use itertools::Itertools;
use zeroize::Zeroizing;

use crate::digest::sha256_hex;

/// Sort key for the item originally at `position`.
///
/// The seed carries the master secret, so the keyed input is wiped after
/// hashing.
#[must_use]
pub fn position_key(seed: &str, position: usize) -> String {
    let input = Zeroizing::new(format!("{seed}:{position}"));
    sha256_hex(&input)
}

/// Permute `items` deterministically under `seed`.
///
/// The output is a permutation of the input: same length, same elements.
pub fn deterministic_shuffle<T>(items: impl IntoIterator<Item = T>, seed: &str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| (position_key(seed, position), item))
        .sorted_by(|(left, _), (right, _)| left.cmp(right))
        .map(|(_, item)| item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_permutation() {
        let shuffled = deterministic_shuffle("abcd".chars(), "seed");
        assert_eq!(shuffled, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_same_seed_same_order() {
        let items: Vec<u32> = (0..32).collect();
        assert_eq!(
            deterministic_shuffle(items.clone(), "seed"),
            deterministic_shuffle(items, "seed")
        );
    }

    #[test]
    fn test_is_permutation() {
        let items: Vec<u32> = (0..50).collect();
        let mut shuffled = deterministic_shuffle(items.clone(), "another seed");
        assert_ne!(shuffled, items);
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn test_empty_input() {
        let shuffled: Vec<char> = deterministic_shuffle(Vec::new(), "seed");
        assert!(shuffled.is_empty());
    }

    #[test]
    fn test_position_key_format() {
        assert_eq!(position_key("seed", 3), sha256_hex("seed:3"));
    }
}
