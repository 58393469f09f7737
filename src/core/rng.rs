//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Create independent branches (the arena forks one per game)
//! - **Context streams**: Independent sequences for different purposes
//!
//! The engine keeps one stream for rolling piles and another for opponent
//! decisions, so resetting a game never shifts the opponent's choices.
//!
//! ```
//! use nim_engine::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut piles = rng.for_context("piles");
//! let mut piles_again = GameRng::new(42).for_context("piles");
//!
//! assert_eq!(piles.gen_inclusive(1, 10), piles_again.gen_inclusive(1, 10));
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG with a seed drawn from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// Create an RNG from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random integer in `[low, high]`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn gen_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }

    /// Generate a random index in `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is 0.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// The probability is clamped to `[0, 1]`; NaN counts as 0.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_inclusive(0, 1000), rng2.gen_inclusive(0, 1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_inclusive(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_inclusive(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_inclusive_bounds() {
        let mut rng = GameRng::new(7);
        let mut seen_low = false;
        let mut seen_high = false;

        for _ in 0..500 {
            let v = rng.gen_inclusive(1, 3);
            assert!((1..=3).contains(&v));
            seen_low |= v == 1;
            seen_high |= v == 3;
        }

        assert!(seen_low && seen_high, "both endpoints are reachable");
        assert_eq!(rng.gen_inclusive(5, 5), 5);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_inclusive(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_inclusive(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        let mut piles = rng.for_context("piles");
        let mut opponent = rng.for_context("opponent");

        let seq1: Vec<_> = (0..10).map(|_| piles.gen_inclusive(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| opponent.gen_inclusive(0, 1000)).collect();
        assert_ne!(seq1, seq2);

        let mut again = GameRng::new(42).for_context("piles");
        let seq3: Vec<_> = (0..10).map(|_| again.gen_inclusive(0, 1000)).collect();
        assert_eq!(seq1, seq3);
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            assert!(rng.gen_bool(1.0));
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(2.0));
        }
    }

    #[test]
    #[should_panic]
    fn test_gen_index_empty_panics() {
        GameRng::new(1).gen_index(0);
    }

    #[test]
    #[should_panic]
    fn test_gen_inclusive_inverted_panics() {
        GameRng::new(1).gen_inclusive(5, 4);
    }

    #[test]
    fn test_gen_bool_nan_is_false() {
        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            assert!(!rng.gen_bool(f64::NAN));
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
