//! # Restartable Random Sequences
//!
//! [`PrnSequence`] produces a finite stream of values lazily: only the
//! current value and a cursor are stored, so memory use does not depend on
//! the sequence length. [`restart`](PrnSequence::restart) replays the
//! identical stream from its seed.
//!
//! ## State Machine
//!
//! ```text
//! new/restart ──► used = 0, current = v0
//! advance     ──► used += 1, current = v(used)      (while used < size)
//! exhausted   ──► used == size
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use projrand_structures::PrnSequence;
//!
//! let mut seq: PrnSequence = PrnSequence::with_seed(5, 7);
//!
//! let mut first = Vec::new();
//! while !seq.is_exhausted() {
//!     first.push(*seq.current());
//!     seq.advance();
//! }
//!
//! seq.restart();
//! let second: Vec<u64> = seq.pass().collect();
//! assert_eq!(first, second);
//! ```

mod distribution;

use std::fmt;
use std::iter::FusedIterator;

use projrand_core::{SeedableEngine, TwisterEngine};
use tracing::trace;

pub use distribution::{
    MapDistribution, Sampled, StreamDistribution, UnchangedDistribution, UnitDistribution,
};

/// Lazily generated, restartable sequence of random values.
///
/// # Type Parameters
///
/// * `E` - Engine driving the sequence (default [`TwisterEngine`])
/// * `D` - Distribution mapping engine output to values (default identity)
pub struct PrnSequence<E = TwisterEngine, D = UnchangedDistribution>
where
    E: SeedableEngine,
    D: StreamDistribution<E>,
{
    /// Seed every pass starts from.
    seed: u64,
    /// Number of advances since the last restart.
    used: usize,
    /// Target element count.
    size: usize,
    engine: E,
    dist: D,
    /// Result of the most recent generation step.
    current: D::Output,
}

impl<E, D> PrnSequence<E, D>
where
    E: SeedableEngine,
    D: StreamDistribution<E>,
{
    /// Creates a sequence of `size` values and generates the first one.
    pub fn new(size: usize, seed: u64, mut dist: D) -> Self {
        let mut engine = E::from_seed(seed);
        let current = dist.sample(&mut engine);
        Self {
            seed,
            used: 0,
            size,
            engine,
            dist,
            current,
        }
    }

    /// Creates a sequence with a default-constructed distribution.
    pub fn with_seed(size: usize, seed: u64) -> Self
    where
        D: Default,
    {
        Self::new(size, seed, D::default())
    }

    /// Returns the most recently generated value without advancing.
    #[inline]
    pub fn current(&self) -> &D::Output {
        &self.current
    }

    /// Generates the next value and moves the cursor forward.
    ///
    /// Returns `None` and leaves the state untouched once the sequence is
    /// exhausted; check [`remaining`](Self::remaining) to avoid that.
    pub fn advance(&mut self) -> Option<&D::Output> {
        if self.is_exhausted() {
            return None;
        }
        self.current = self.dist.sample(&mut self.engine);
        self.used += 1;
        Some(&self.current)
    }

    /// Rewinds to the first value.
    ///
    /// Reseeds the engine, resets the distribution and regenerates the
    /// first value, so every pass yields the same values.
    pub fn restart(&mut self) {
        trace!(
            seed = self.seed,
            size = self.size,
            used = self.used,
            "restarting sequence"
        );
        self.engine.reseed(self.seed);
        self.dist.reset();
        self.used = 0;
        self.current = self.dist.sample(&mut self.engine);
    }

    /// Sets a new target size and restarts.
    pub fn resize(&mut self, size: usize) {
        self.size = size;
        self.restart();
    }

    /// Restarts and returns an iterator over one full pass.
    ///
    /// The iterator yields the value at each cursor position `0..size` and
    /// leaves the sequence exhausted when drained.
    pub fn pass(&mut self) -> PrnPass<'_, E, D> {
        self.restart();
        PrnPass { sequence: self }
    }

    /// Returns the number of advances left before exhaustion.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.size - self.used
    }

    /// Returns `true` once `used == size`.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.used == self.size
    }

    /// Returns the target element count.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of advances since the last restart.
    #[inline]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the distribution.
    #[inline]
    pub fn distribution(&self) -> &D {
        &self.dist
    }
}

impl<E, D> Clone for PrnSequence<E, D>
where
    E: SeedableEngine + Clone,
    D: StreamDistribution<E> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            seed: self.seed,
            used: self.used,
            size: self.size,
            engine: self.engine.clone(),
            dist: self.dist.clone(),
            current: self.current.clone(),
        }
    }
}

impl<E, D> fmt::Debug for PrnSequence<E, D>
where
    E: SeedableEngine,
    D: StreamDistribution<E>,
    D::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrnSequence")
            .field("seed", &self.seed)
            .field("used", &self.used)
            .field("size", &self.size)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// One pass over a [`PrnSequence`], created by [`PrnSequence::pass`].
pub struct PrnPass<'a, E, D>
where
    E: SeedableEngine,
    D: StreamDistribution<E>,
{
    sequence: &'a mut PrnSequence<E, D>,
}

impl<E, D> Iterator for PrnPass<'_, E, D>
where
    E: SeedableEngine,
    D: StreamDistribution<E>,
{
    type Item = D::Output;

    fn next(&mut self) -> Option<Self::Item> {
        if self.sequence.is_exhausted() {
            return None;
        }
        let value = self.sequence.current.clone();
        self.sequence.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.remaining();
        (remaining, Some(remaining))
    }
}

impl<E, D> ExactSizeIterator for PrnPass<'_, E, D>
where
    E: SeedableEngine,
    D: StreamDistribution<E>,
{
}

impl<E, D> FusedIterator for PrnPass<'_, E, D>
where
    E: SeedableEngine,
    D: StreamDistribution<E>,
{
}
