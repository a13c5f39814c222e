//! Reproducible random initial configurations.
//!
//! Rows are drawn from a ChaCha8 RNG seeded with a caller-supplied
//! `u64`, so the same seed and width always give the same row on every
//! platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trine_core::{Configuration, Symbol};

/// A row of `width` uniformly random symbols determined by `seed`.
///
/// # Examples
///
/// ```
/// use trine_engine::random_configuration;
///
/// let a = random_configuration(100, 7);
/// let b = random_configuration(100, 7);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 100);
/// ```
pub fn random_configuration(width: usize, seed: u64) -> Configuration {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..width)
        .map(|_| Symbol::ALL[rng.random_range(0..Symbol::COUNT)])
        .collect()
}

/// A random row with a fresh seed from the thread RNG.
///
/// Returns the seed alongside the row so the run can be reproduced with
/// [`random_configuration`].
pub fn random_configuration_unseeded(width: usize) -> (Configuration, u64) {
    let seed: u64 = rand::rng().random();
    (random_configuration(width, seed), seed)
}
