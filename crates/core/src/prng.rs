//! Random sources for the decorative generators.
//!
//! Decorations (grass, clouds) are the only place randomness enters a scene.
//! They draw from a [`RandomSource`] supplied by the caller, so a scene is
//! reproducible whenever the source is: [`Xorshift64`] with a fixed seed gives
//! bit-identical output on every platform.

use serde::{Deserialize, Serialize};

/// A stream of uniform samples in `[0, 1)`.
///
/// Implementors only provide [`next_f64`](RandomSource::next_f64); range
/// sampling is derived from it.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed value in `[min, max)`.
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Xorshift64 PRNG with shifts (13, 7, 17).
///
/// Seed 0 is replaced by a fixed non-zero fallback because all-zero state is
/// a fixed point of the algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of the next state over 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through a fixed list; lets tests pin exact decoration output.
    struct Sequence(Vec<f64>, usize);

    impl RandomSource for Sequence {
        fn next_f64(&mut self) -> f64 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    #[test]
    fn next_u64_matches_golden_value_for_seed_42() {
        // Changing this breaks every saved render plan.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_uses_fallback() {
        let mut zero = Xorshift64::new(0);
        let mut fallback = Xorshift64::new(Xorshift64::FALLBACK_SEED);
        assert_ne!(zero.next_u64(), 0);
        assert_eq!(zero.next_u64(), {
            fallback.next_u64();
            fallback.next_u64()
        });
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xorshift64::new(7);
        let mut b = Xorshift64::new(7);
        for i in 0..500 {
            assert_eq!(a.next_f64(), b.next_f64(), "diverged at {i}");
        }
    }

    #[test]
    fn uniform_uses_trait_default_over_custom_source() {
        let mut seq = Sequence(vec![0.0, 0.5, 0.75], 0);
        assert_eq!(seq.uniform(0.2, 0.6), 0.2);
        assert_eq!(seq.uniform(0.2, 0.6), 0.4);
        assert_eq!(seq.uniform(-1.0, 1.0), 0.5);
    }

    #[test]
    fn state_survives_serialization_mid_stream() {
        let mut rng = Xorshift64::new(99);
        for _ in 0..10 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for _ in 0..20 {
            assert_eq!(rng.next_u64(), restored.next_u64());
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!((0.0..1.0).contains(&v));
                }
            }

            #[test]
            fn uniform_stays_in_bounds(
                seed: u64,
                min in -10.0_f64..10.0,
                width in 0.001_f64..10.0,
            ) {
                let mut rng = Xorshift64::new(seed);
                let max = min + width;
                for _ in 0..100 {
                    let v = rng.uniform(min, max);
                    prop_assert!(v >= min && v < max, "{v} not in [{min}, {max})");
                }
            }
        }
    }
}
