//! Per-call random sources.
//!
//! Each call gets a fresh ChaCha8Rng. Same seed -> same draws, on every
//! platform, regardless of what else ran in the process.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stacker_core::constants::ROUNDING_DECIMALS;

use crate::rounding::round_to;

/// Generator for one call. `None` draws a seed from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Single seeded draw from `[min, max)`, rounded to 4 decimals.
///
/// Used for ungrouped LoRAs with a random strength range. A reversed
/// range (`min > max`) draws from `(max, min]` instead of failing.
pub fn uniform_in_range(min: f64, max: f64, seed: u64) -> f64 {
    let mut rng = seeded_rng(Some(seed));
    uniform_with_rng(min, max, &mut rng)
}

/// Same as [`uniform_in_range`] with a caller-owned generator.
pub fn uniform_with_rng<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.gen();
    round_to(min + (max - min) * u, ROUNDING_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_draws() {
        let mut a = seeded_rng(Some(42));
        let mut b = seeded_rng(Some(42));
        let va: Vec<u64> = (0..8).map(|_| a.gen()).collect();
        let vb: Vec<u64> = (0..8).map(|_| b.gen()).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = seeded_rng(Some(42));
        let mut b = seeded_rng(Some(43));
        let va: u64 = a.gen();
        let vb: u64 = b.gen();
        assert_ne!(va, vb);
    }

    #[test]
    fn uniform_stays_in_range() {
        for seed in 0..200 {
            let v = uniform_in_range(0.5, 1.0, seed);
            assert!((0.5..=1.0).contains(&v), "seed {seed}: {v}");
        }
    }

    #[test]
    fn uniform_is_rounded() {
        let v = uniform_in_range(0.0, 1.0, 7);
        assert_eq!(v, round_to(v, 4));
    }

    #[test]
    fn degenerate_range_returns_bound() {
        assert_eq!(uniform_in_range(0.75, 0.75, 99), 0.75);
    }

    #[test]
    fn reversed_range_does_not_panic() {
        let v = uniform_in_range(1.0, 0.5, 3);
        assert!((0.5..=1.0).contains(&v));
    }
}
