//! Bit-packed Rademacher vector.
//!
//! This module provides [`CompactRademacher`], which stores one sign per bit
//! in a `Vec<u64>` and applies them in place to numeric slices.

use std::fmt;
use std::marker::PhantomData;

use projrand_core::{entropy_seed, RandomEngine, SeedableEngine, TwisterEngine};
use rayon::prelude::*;
use tracing::debug;

use super::{
    apply_word, check_target, sign_index, sign_table, SignElement, BITMASK, INT_SIGNS, SHIFT,
    WORD_BITS,
};
use crate::config::SignVectorConfig;
use crate::error::SignVectorError;

/// Deterministic random ±1 vector with one bit of storage per element.
///
/// The vector is fully randomised at construction and again on every
/// [`resize`](Self::resize): the raw engine words *are* the bit pattern.
/// Identical `(size, seed)` pairs always give identical storage.
///
/// # Type Parameters
///
/// * `E` - Engine used to generate the words (default [`TwisterEngine`])
///
/// # Examples
///
/// ```rust
/// use projrand_structures::CompactRademacher;
///
/// let signs: CompactRademacher = CompactRademacher::new(128, 42).unwrap();
/// assert_eq!(signs.size(), 128);
/// assert_eq!(signs.nwords(), 2);
///
/// let mut v = vec![1.0_f64; 128];
/// signs.apply(&mut v).unwrap();
/// assert!(v.iter().all(|&x| x == 1.0 || x == -1.0));
///
/// // Each sign is its own inverse
/// signs.apply(&mut v).unwrap();
/// assert!(v.iter().all(|&x| x == 1.0));
/// ```
pub struct CompactRademacher<E = TwisterEngine> {
    /// Seed every randomisation starts from.
    seed: u64,
    /// Packed sign words; bit `j` of word `i` is element `i * 64 + j`.
    words: Vec<u64>,
    _engine: PhantomData<fn() -> E>,
}

impl<E: SeedableEngine> CompactRademacher<E> {
    /// Allocates `n / 64` words and randomises them from `seed`.
    ///
    /// # Errors
    ///
    /// - `InvalidSize` if `n` is not a multiple of [`WORD_BITS`]
    /// - `OutOfMemory` if the storage cannot be allocated
    pub fn new(n: usize, seed: u64) -> Result<Self, SignVectorError> {
        let nwords = word_count(n)?;
        let mut signs = Self {
            seed,
            words: allocate(nwords)?,
            _engine: PhantomData,
        };
        signs.randomize();
        debug!(
            nwords,
            word_bits = WORD_BITS,
            size = signs.size(),
            seed,
            "allocated compact sign vector"
        );
        Ok(signs)
    }

    /// Creates a sign vector seeded from runtime entropy.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_entropy(n: usize) -> Result<Self, SignVectorError> {
        Self::new(n, entropy_seed())
    }

    /// Creates a sign vector from a validated configuration.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_config(config: &SignVectorConfig) -> Result<Self, SignVectorError> {
        Self::new(config.size(), config.seed_policy().resolve())
    }

    /// Regenerates every word from the stored seed.
    pub fn randomize(&mut self) {
        E::from_seed(self.seed).fill(&mut self.words);
    }

    /// Reallocates storage for `n` signs and re-randomises all of them.
    ///
    /// Previously generated bits are not preserved, even below the old
    /// size: the result equals `CompactRademacher::new(n, self.seed())`.
    ///
    /// # Errors
    ///
    /// - `InvalidSize` if `n` is not a multiple of [`WORD_BITS`]
    /// - `OutOfMemory` if the storage cannot be allocated
    ///
    /// On error the vector is left unchanged.
    pub fn resize(&mut self, n: usize) -> Result<(), SignVectorError> {
        let nwords = word_count(n)?;
        self.words = allocate(nwords)?;
        self.randomize();
        debug!(nwords, size = n, "resized compact sign vector");
        Ok(())
    }

    /// Stores a new seed and re-randomises every word from it.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.randomize();
    }
}

impl<E> CompactRademacher<E> {
    /// Returns the number of logical signs.
    #[inline]
    pub fn size(&self) -> usize {
        self.words.len() << SHIFT
    }

    /// Returns the number of signs the allocation can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.capacity() << SHIFT
    }

    /// Returns the number of storage words.
    #[inline]
    pub fn nwords(&self) -> usize {
        self.words.len()
    }

    /// Returns the storage size in bytes.
    #[inline]
    pub fn nbytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }

    /// Returns `true` if the vector holds no signs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the packed storage words.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Clears every bit, turning every sign into `-1`.
    pub fn zero(&mut self) {
        self.words.fill(0);
    }

    /// Reserves storage for at least `n_bits` signs without changing size.
    ///
    /// # Errors
    ///
    /// Returns `OutOfMemory` if the reservation fails.
    pub fn reserve(&mut self, n_bits: usize) -> Result<(), SignVectorError> {
        let target = n_bits.div_ceil(WORD_BITS);
        if target > self.words.len() {
            self.words
                .try_reserve_exact(target - self.words.len())
                .map_err(|_| SignVectorError::out_of_memory(target))?;
        }
        Ok(())
    }

    /// Returns `true` if the sign at `index` is `+1`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[inline]
    pub fn is_positive(&self, index: usize) -> bool {
        sign_index(self.words[index >> SHIFT], index & BITMASK) == 0
    }

    /// Returns the sign at `index` as an integer.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[inline]
    pub fn at(&self, index: usize) -> i32 {
        INT_SIGNS[sign_index(self.words[index >> SHIFT], index & BITMASK)]
    }

    /// Returns the sign at `index` as `f64`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.value(index)
    }

    /// Returns the sign at `index` converted to `T`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[inline]
    pub fn value<T: SignElement>(&self, index: usize) -> T {
        sign_table::<T>()[sign_index(self.words[index >> SHIFT], index & BITMASK)]
    }

    /// Returns a typed read-only view of the signs.
    pub fn as_type<T: SignElement>(&self) -> SignView<'_, T, E> {
        SignView {
            source: self,
            table: sign_table(),
        }
    }

    /// Multiplies `vector` in place by the signs.
    ///
    /// A shorter `vector` only receives the first `vector.len()` signs and a
    /// warning is logged. No allocation takes place.
    ///
    /// The warning is emitted on every such call. Callers applying the signs
    /// block by block in a loop should filter `projrand_structures` below
    /// `warn` or apply to full-length targets.
    ///
    /// # Errors
    ///
    /// Returns `Capacity` if `vector` is longer than [`size`](Self::size).
    pub fn apply<T: SignElement>(&self, vector: &mut [T]) -> Result<(), SignVectorError> {
        check_target(vector.len(), self.size())?;
        let table = sign_table();
        for (chunk, &word) in vector.chunks_mut(WORD_BITS).zip(&self.words) {
            apply_word(chunk, word, &table);
        }
        Ok(())
    }

    /// Copies `input` into `output` and applies the signs to `output`.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if the buffers differ in length
    /// - `Capacity` as for [`apply`](Self::apply)
    pub fn apply_into<T: SignElement>(
        &self,
        input: &[T],
        output: &mut [T],
    ) -> Result<(), SignVectorError> {
        if input.len() != output.len() {
            return Err(SignVectorError::length_mismatch(input.len(), output.len()));
        }
        output.copy_from_slice(input);
        self.apply(output)
    }

    /// Parallel [`apply`](Self::apply), one word-sized chunk per task.
    ///
    /// # Errors
    ///
    /// Returns `Capacity` if `vector` is longer than [`size`](Self::size).
    pub fn apply_par<T>(&self, vector: &mut [T]) -> Result<(), SignVectorError>
    where
        T: SignElement + Send + Sync,
    {
        check_target(vector.len(), self.size())?;
        let table = sign_table();
        vector
            .par_chunks_mut(WORD_BITS)
            .zip(self.words.par_iter())
            .for_each(|(chunk, &word)| apply_word(chunk, word, &table));
        Ok(())
    }

    /// Returns an iterator over the signs as integers.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = i32> + '_ {
        (0..self.size()).map(move |i| self.at(i))
    }
}

impl<E> Clone for CompactRademacher<E> {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed,
            words: self.words.clone(),
            _engine: PhantomData,
        }
    }
}

impl<E> fmt::Debug for CompactRademacher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompactRademacher")
            .field("size", &self.size())
            .field("nwords", &self.nwords())
            .field("seed", &self.seed)
            .finish()
    }
}

/// Equal size and word-for-word identical storage; the seed is ignored.
impl<E, F> PartialEq<CompactRademacher<F>> for CompactRademacher<E> {
    fn eq(&self, other: &CompactRademacher<F>) -> bool {
        self.size() == other.size() && self.words == other.words
    }
}

impl<E> Eq for CompactRademacher<E> {}

/// Typed view over a [`CompactRademacher`].
///
/// # Examples
///
/// ```rust
/// use projrand_structures::CompactRademacher;
///
/// let signs: CompactRademacher = CompactRademacher::new(64, 1).unwrap();
/// let view = signs.as_type::<f32>();
/// assert_eq!(view.len(), 64);
/// assert!(view.iter().all(|s| s == 1.0 || s == -1.0));
/// ```
pub struct SignView<'a, T, E = TwisterEngine> {
    source: &'a CompactRademacher<E>,
    table: [T; 2],
}

impl<'a, T: SignElement, E> SignView<'a, T, E> {
    /// Returns the sign at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.table[sign_index(self.source.words[index >> SHIFT], index & BITMASK)]
    }

    /// Returns the number of signs.
    #[inline]
    pub fn len(&self) -> usize {
        self.source.size()
    }

    /// Returns `true` if the view holds no signs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Returns an iterator over all signs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = T> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}

fn word_count(n: usize) -> Result<usize, SignVectorError> {
    if n & BITMASK != 0 {
        return Err(SignVectorError::invalid_size(n));
    }
    Ok(n >> SHIFT)
}

fn allocate(nwords: usize) -> Result<Vec<u64>, SignVectorError> {
    let mut words = Vec::new();
    words
        .try_reserve_exact(nwords)
        .map_err(|_| SignVectorError::out_of_memory(nwords))?;
    words.resize(nwords, 0);
    Ok(words)
}
