//! Storage-free Rademacher vector.

use std::fmt;
use std::marker::PhantomData;

use projrand_core::{RandomEngine, SeedableEngine, TwisterEngine};

use super::{apply_word, check_target, sign_table, CompactRademacher, SignElement, WORD_BITS};
use crate::error::SignVectorError;

/// Sign vector that keeps only its length and seed.
///
/// Every [`apply`](Self::apply) reseeds a fresh engine and consumes one word
/// per 64 elements, so memory use is constant in the logical size. Signs are
/// identical to a [`CompactRademacher`] built with the same engine and seed.
///
/// Unlike the compact form the size need not be word-aligned; the final word
/// is only partially consumed.
///
/// # Examples
///
/// ```rust
/// use projrand_structures::{CompactRademacher, SeededRademacher};
///
/// let seeded: SeededRademacher = SeededRademacher::new(256, 9);
/// let compact: CompactRademacher = CompactRademacher::new(256, 9).unwrap();
///
/// let mut a = vec![2.0_f64; 256];
/// let mut b = a.clone();
/// seeded.apply(&mut a).unwrap();
/// compact.apply(&mut b).unwrap();
/// assert_eq!(a, b);
/// ```
pub struct SeededRademacher<E = TwisterEngine> {
    size: usize,
    seed: u64,
    _engine: PhantomData<fn() -> E>,
}

impl<E: SeedableEngine> SeededRademacher<E> {
    /// Creates a seeded sign vector of logical length `n`.
    pub fn new(n: usize, seed: u64) -> Self {
        Self {
            size: n,
            seed,
            _engine: PhantomData,
        }
    }

    /// Returns the logical length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Changes the logical length. Signs below the old length are unchanged.
    pub fn resize(&mut self, n: usize) {
        self.size = n;
    }

    /// Multiplies `vector` in place by the signs, regenerating them.
    ///
    /// # Errors
    ///
    /// Returns `Capacity` if `vector` is longer than [`size`](Self::size).
    pub fn apply<T: SignElement>(&self, vector: &mut [T]) -> Result<(), SignVectorError> {
        check_target(vector.len(), self.size)?;
        let table = sign_table();
        let mut engine = E::from_seed(self.seed);
        for chunk in vector.chunks_mut(WORD_BITS) {
            apply_word(chunk, engine.next(), &table);
        }
        Ok(())
    }

    /// Materialises the signs into a [`CompactRademacher`].
    ///
    /// # Errors
    ///
    /// - `InvalidSize` if the length is not a multiple of [`WORD_BITS`]
    /// - `OutOfMemory` if the storage cannot be allocated
    pub fn to_compact(&self) -> Result<CompactRademacher<E>, SignVectorError> {
        CompactRademacher::new(self.size, self.seed)
    }
}

impl<E> Clone for SeededRademacher<E> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            seed: self.seed,
            _engine: PhantomData,
        }
    }
}

impl<E> fmt::Debug for SeededRademacher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRademacher")
            .field("size", &self.size)
            .field("seed", &self.seed)
            .finish()
    }
}
