//! Distribution plug-ins for [`PrnSequence`](super::PrnSequence).
//!
//! A distribution turns engine output into sequence values. It may keep
//! internal state (e.g. a cached second variate) as long as
//! [`StreamDistribution::reset`] returns it to its initial condition.

use std::marker::PhantomData;

use projrand_core::RandomEngine;
use rand::RngCore;

/// Maps engine output to sequence values.
pub trait StreamDistribution<E: RandomEngine> {
    /// Value type produced.
    type Output: Clone;

    /// Draws the next value, pulling from `engine` as needed.
    fn sample(&mut self, engine: &mut E) -> Self::Output;

    /// Clears any internal state. The default is a no-op.
    fn reset(&mut self) {}
}

/// Identity: yields raw engine output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnchangedDistribution;

impl<E: RandomEngine> StreamDistribution<E> for UnchangedDistribution {
    type Output = u64;

    #[inline]
    fn sample(&mut self, engine: &mut E) -> u64 {
        engine.next()
    }
}

/// Yields engine output mapped onto `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitDistribution;

impl<E: RandomEngine> StreamDistribution<E> for UnitDistribution {
    type Output = f64;

    #[inline]
    fn sample(&mut self, engine: &mut E) -> f64 {
        engine.next_unit()
    }
}

/// Applies a pure function to each engine output.
///
/// # Examples
///
/// ```rust
/// use projrand_structures::{MapDistribution, PrnSequence};
/// use projrand_core::TwisterEngine;
///
/// let parity = MapDistribution::new(|x: u64| x & 1 == 1);
/// let seq: PrnSequence<TwisterEngine, _> = PrnSequence::new(4, 3, parity);
/// assert_eq!(seq.size(), 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MapDistribution<F> {
    map: F,
}

impl<F> MapDistribution<F> {
    /// Wraps `map`.
    pub fn new(map: F) -> Self {
        Self { map }
    }
}

impl<E, F, T> StreamDistribution<E> for MapDistribution<F>
where
    E: RandomEngine,
    F: Fn(u64) -> T,
    T: Clone,
{
    type Output = T;

    #[inline]
    fn sample(&mut self, engine: &mut E) -> T {
        (self.map)(engine.next())
    }
}

/// Adapter for any `rand_distr` distribution.
///
/// Requires an engine that also implements `RngCore`, such as
/// [`TwisterEngine`](projrand_core::TwisterEngine).
///
/// # Examples
///
/// ```rust
/// use projrand_structures::{PrnSequence, Sampled};
/// use projrand_core::TwisterEngine;
/// use rand_distr::StandardNormal;
///
/// let normal: Sampled<StandardNormal, f64> = Sampled::new(StandardNormal);
/// let seq: PrnSequence<TwisterEngine, _> = PrnSequence::new(16, 11, normal);
/// assert!(seq.current().is_finite());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Sampled<D, T> {
    dist: D,
    _output: PhantomData<fn() -> T>,
}

impl<D, T> Sampled<D, T> {
    /// Wraps `dist`.
    pub fn new(dist: D) -> Self {
        Self {
            dist,
            _output: PhantomData,
        }
    }

    /// Returns the wrapped distribution.
    pub fn inner(&self) -> &D {
        &self.dist
    }
}

impl<E, D, T> StreamDistribution<E> for Sampled<D, T>
where
    E: RandomEngine + RngCore,
    D: rand_distr::Distribution<T>,
    T: Clone,
{
    type Output = T;

    #[inline]
    fn sample(&mut self, engine: &mut E) -> T {
        self.dist.sample(engine)
    }
}
