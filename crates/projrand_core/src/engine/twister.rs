//! 64-bit Mersenne Twister engine.
//!
//! This module provides [`TwisterEngine`], the default engine behind the
//! sign vectors and streams. Output is bit-identical to the reference
//! MT19937-64 generator for the same seed.

use std::fmt;

use rand::{Error, RngCore};
use rand_mt::Mt64;

use super::{RandomEngine, SeedableEngine};

/// MT19937-64 engine with seed tracking.
///
/// # Examples
///
/// ```rust
/// use projrand_core::{RandomEngine, SeedableEngine, TwisterEngine};
///
/// let mut a = TwisterEngine::from_seed(7);
/// let mut b = TwisterEngine::from_seed(7);
/// assert_eq!(a.next(), b.next());
/// assert_eq!(a.seed(), 7);
/// ```
#[derive(Clone)]
pub struct TwisterEngine {
    /// The underlying twister state.
    inner: Mt64,
    /// The most recent seed (stored for reproducibility tracking).
    seed: u64,
}

impl TwisterEngine {
    /// Returns the seed the current sequence was started from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl fmt::Debug for TwisterEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwisterEngine")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl RandomEngine for TwisterEngine {
    #[inline]
    fn next(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn reseed(&mut self, seed: u64) {
        self.inner.reseed(seed);
        self.seed = seed;
    }
}

impl SeedableEngine for TwisterEngine {
    #[inline]
    fn from_seed(seed: u64) -> Self {
        Self {
            inner: Mt64::new(seed),
            seed,
        }
    }
}

impl RngCore for TwisterEngine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.fill_bytes(dest);
        Ok(())
    }
}
