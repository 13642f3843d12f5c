//! Uniform random helpers.

use rand::Rng;
use rand::rngs::StdRng;

/// Roll a uniformly distributed integer in `[min, max]`, inclusive.
///
/// Reversed bounds are swapped rather than rejected.
pub fn random_int(rng: &mut StdRng, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

/// Returns true with the given probability.
///
/// A probability at or below 0 never succeeds and one at or above 1
/// always does.
pub fn chance(rng: &mut StdRng, probability: f64) -> bool {
    rng.random::<f64>() < probability
}
