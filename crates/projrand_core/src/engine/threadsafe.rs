//! Lock-serialised engine for sharing one sequence across threads.
//!
//! [`ThreadsafeEngine`] owns an engine behind a [`Mutex`]. Every call holds
//! the lock for its full duration, so concurrent callers observe a strict
//! interleaving of whole calls: a `fill` of `k` values is never split by
//! another thread's `next`. There is no fairness guarantee among waiters.
//!
//! # Example
//!
//! ```rust
//! use projrand_core::{ThreadsafeEngine, TwisterEngine};
//! use std::thread;
//!
//! let engine: ThreadsafeEngine<TwisterEngine> = ThreadsafeEngine::from_seed(99);
//!
//! thread::scope(|s| {
//!     for _ in 0..4 {
//!         s.spawn(|| {
//!             let mut block = [0u64; 16];
//!             engine.fill(&mut block);
//!         });
//!     }
//! });
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{RandomEngine, SeedableEngine};

/// Engine wrapper whose operations take `&self` and serialise on a lock.
///
/// A `&ThreadsafeEngine<E>` is itself a [`RandomEngine`], so a shared
/// reference can be handed to any consumer that is generic over engines.
#[derive(Debug, Default)]
pub struct ThreadsafeEngine<E> {
    inner: Mutex<E>,
}

impl<E: RandomEngine> ThreadsafeEngine<E> {
    /// Wraps an existing engine.
    pub fn new(engine: E) -> Self {
        Self {
            inner: Mutex::new(engine),
        }
    }

    /// Returns one value, holding the lock for the call.
    pub fn next(&self) -> u64 {
        self.lock().next()
    }

    /// Fills `buffer` under a single lock acquisition.
    pub fn fill(&self, buffer: &mut [u64]) {
        self.lock().fill(buffer)
    }

    /// Reseeds the wrapped engine.
    pub fn reseed(&self, seed: u64) {
        self.lock().reseed(seed)
    }

    /// Returns the next value mapped onto `[0, 1]`.
    pub fn next_unit(&self) -> f64 {
        self.lock().next_unit()
    }

    /// Consumes the wrapper and returns the engine.
    pub fn into_inner(self) -> E {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // Poison is ignored: the engine state has no multi-step invariant.
    fn lock(&self) -> MutexGuard<'_, E> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: SeedableEngine> ThreadsafeEngine<E> {
    /// Creates a shared engine initialised with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(E::from_seed(seed))
    }
}

impl<E: RandomEngine> RandomEngine for &ThreadsafeEngine<E> {
    #[inline]
    fn next(&mut self) -> u64 {
        ThreadsafeEngine::next(*self)
    }

    #[inline]
    fn reseed(&mut self, seed: u64) {
        ThreadsafeEngine::reseed(*self, seed)
    }

    #[inline]
    fn fill(&mut self, buffer: &mut [u64]) {
        ThreadsafeEngine::fill(*self, buffer)
    }
}
