//! Deterministic RNG wrapper using PCG32.
//!
//! All synthesis randomness MUST come through this module, seeded by the
//! pattern seed. An unseeded random source would break the byte-identical
//! output contract that shareable-screenshot caching relies on.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use skinforge_spec::PatternSeed;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Create a new RNG from a pattern seed.
    pub fn from_pattern_seed(seed: PatternSeed) -> Self {
        Self::new(seed.value())
    }

    /// Derive a seed for a specific overlay layer using BLAKE3.
    ///
    /// Each layer draws from an independent stream, so adding a draw to one
    /// layer cannot shift the placement of every later layer.
    pub fn derive_layer_seed(base_seed: u32, layer_index: u32) -> u32 {
        let mut input = Vec::with_capacity(8);
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(&layer_index.to_le_bytes());
        let hash = blake3::hash(&input);
        let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
        u32::from_le_bytes(bytes)
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// Generate a random f64 in the range [-1.0, 1.0).
    #[inline]
    pub fn gen_signed_f64(&mut self) -> f64 {
        self.gen_f64() * 2.0 - 1.0
    }
}
