//! # Random Engine Infrastructure
//!
//! This module provides the 64-bit generators that feed the structured
//! random transforms. Every engine is seeded explicitly and replays the
//! identical sequence after a [`RandomEngine::reseed`] with the same seed.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: same seed, same sequence, on every platform
//! - **Efficiency**: bulk generation writes into caller-owned `&mut [u64]`
//! - **Static dispatch**: consumers are generic over the engine type
//!
//! ## Module Structure
//!
//! - [`twister`]: MT19937-64 engine
//! - [`adapter`]: wrapper for `rand` generators
//! - [`threadsafe`]: mutex-serialised engine for shared use

mod adapter;
mod threadsafe;
mod twister;

pub use adapter::{RngEngine, StdEngine};
pub use threadsafe::ThreadsafeEngine;
pub use twister::TwisterEngine;

/// Reciprocal of the largest engine output, used for unit-interval mapping.
const MAX_INV: f64 = 1.0 / u64::MAX as f64;

/// A generator of 64-bit pseudo-random integers.
///
/// Implementors only need to provide [`next`](RandomEngine::next) and
/// [`reseed`](RandomEngine::reseed); bulk generation defaults to a plain
/// loop over `next`, so `fill` is always equivalent to that many sequential
/// calls in the same order.
pub trait RandomEngine {
    /// Advances the state and returns one value.
    fn next(&mut self) -> u64;

    /// Resets the state so the engine replays the sequence of a freshly
    /// constructed engine with `seed`.
    fn reseed(&mut self, seed: u64);

    /// Writes `buffer.len()` consecutive values into `buffer`.
    ///
    /// Empty buffers are a no-op.
    #[inline]
    fn fill(&mut self, buffer: &mut [u64]) {
        for slot in buffer.iter_mut() {
            *slot = self.next();
        }
    }

    /// Returns the next value mapped onto `[0, 1]`.
    #[inline]
    fn next_unit(&mut self) -> f64 {
        to_unit_interval(self.next())
    }
}

/// Engines that can be built directly from a 64-bit seed.
pub trait SeedableEngine: RandomEngine + Sized {
    /// Creates an engine initialised with `seed`.
    fn from_seed(seed: u64) -> Self;

    /// Creates an engine seeded from runtime entropy.
    fn from_entropy() -> Self {
        Self::from_seed(crate::seed::entropy_seed())
    }
}

impl<E: RandomEngine + ?Sized> RandomEngine for &mut E {
    #[inline]
    fn next(&mut self) -> u64 {
        (**self).next()
    }

    #[inline]
    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }

    #[inline]
    fn fill(&mut self, buffer: &mut [u64]) {
        (**self).fill(buffer)
    }
}

/// Maps a raw engine output onto the closed unit interval `[0, 1]`.
///
/// # Examples
///
/// ```rust
/// use projrand_core::to_unit_interval;
///
/// assert_eq!(to_unit_interval(0), 0.0);
/// assert_eq!(to_unit_interval(u64::MAX), 1.0);
/// ```
#[inline]
pub fn to_unit_interval(value: u64) -> f64 {
    value as f64 * MAX_INV
}
