//! Decorative animation delays.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::constants::{ENTRANCE_STAGGER_SECS, FLOATING_DELAY_MAX_SECS};

/// Animation delays for the hero decorations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decorations {
    /// One random delay per floating card.
    pub floating: Vec<Duration>,
    /// Staggered delays of the entrance elements.
    pub entrance: Vec<Duration>,
}

impl Decorations {
    /// Compute delays, from `seed` when given, otherwise from entropy.
    #[must_use]
    pub fn generate(floating_cards: usize, entrance_elements: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            floating: floating_delays(floating_cards, &mut rng),
            entrance: entrance_delays(entrance_elements),
        }
    }
}

/// Random delay in `[0, 0.5)` s per floating card.
pub fn floating_delays<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Duration> {
    (0..count)
        .map(|_| Duration::from_secs_f64(rng.random_range(0.0..FLOATING_DELAY_MAX_SECS)))
        .collect()
}

/// Delay `index × 0.1` s per entrance element.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn entrance_delays(count: usize) -> Vec<Duration> {
    (0..count)
        .map(|i| Duration::from_secs_f64(i as f64 * ENTRANCE_STAGGER_SECS))
        .collect()
}

/// Uniform integer in `[min, max]`. The bounds may be given in either order.
pub fn random_in_range<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floating_delays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let delays = floating_delays(50, &mut rng);
        assert_eq!(delays.len(), 50);
        assert!(delays.iter().all(|d| d.as_secs_f64() < FLOATING_DELAY_MAX_SECS));
    }

    #[test]
    fn entrance_is_staggered() {
        let delays = entrance_delays(3);
        assert_eq!(delays[0], Duration::ZERO);
        assert_eq!(delays[1].as_millis(), 100);
        assert_eq!(delays[2].as_millis(), 200);
    }

    #[test]
    fn random_in_range_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let v = random_in_range(3, 5, &mut rng);
            assert!((3..=5).contains(&v));
        }
        assert_eq!(random_in_range(9, 9, &mut rng), 9);
        assert!((1..=4).contains(&random_in_range(4, 1, &mut rng)));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = Decorations::generate(3, 2, Some(5));
        let b = Decorations::generate(3, 2, Some(5));
        assert_eq!(a, b);
        assert_eq!(a.entrance.len(), 2);
    }
}
