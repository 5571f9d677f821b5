//! Adapter exposing `rand` generators as [`RandomEngine`]s.

use rand::rngs::StdRng;
use rand::{Error, RngCore, SeedableRng};

use super::{RandomEngine, SeedableEngine};

/// Engine backed by any `rand` generator.
///
/// Seeding always goes through `SeedableRng::seed_from_u64`, so a given
/// `(generator, seed)` pair is reproducible across platforms.
///
/// # Examples
///
/// ```rust
/// use projrand_core::{RandomEngine, SeedableEngine, StdEngine};
///
/// let mut engine = StdEngine::from_seed(12345);
/// let first = engine.next();
/// engine.reseed(12345);
/// assert_eq!(engine.next(), first);
/// ```
#[derive(Clone, Debug)]
pub struct RngEngine<R> {
    inner: R,
    seed: u64,
}

/// Engine backed by `rand`'s standard generator.
pub type StdEngine = RngEngine<StdRng>;

impl<R> RngEngine<R> {
    /// Returns the seed the current sequence was started from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a mutable reference to the wrapped generator.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }
}

impl<R: RngCore + SeedableRng> RandomEngine for RngEngine<R> {
    #[inline]
    fn next(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn reseed(&mut self, seed: u64) {
        self.inner = R::seed_from_u64(seed);
        self.seed = seed;
    }
}

impl<R: RngCore + SeedableRng> SeedableEngine for RngEngine<R> {
    #[inline]
    fn from_seed(seed: u64) -> Self {
        Self {
            inner: R::seed_from_u64(seed),
            seed,
        }
    }
}

impl<R: RngCore> RngCore for RngEngine<R> {
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
        self.inner.try_fill_bytes(dest)
    }
}
