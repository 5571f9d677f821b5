//! # Rademacher Sign Vectors
//!
//! Random ±1 vectors applied element-wise around a fast Hadamard transform.
//! Two representations share one bit convention:
//!
//! - [`CompactRademacher`]: one bit per sign, materialised at construction
//! - [`SeededRademacher`]: seed only, signs regenerated on every apply
//!
//! ## Bit Convention
//!
//! Logical element `i * 64 + j` is bit `j` of word `i`. A set bit is `+1`,
//! a clear bit is `-1`. Words are consumed straight from the engine in
//! generation order, so for the same engine and seed both representations
//! apply exactly the same signs.

mod compact;
mod seeded;

use std::ops::{MulAssign, Neg};

use num_traits::One;

pub use compact::{CompactRademacher, SignView};
pub use seeded::SeededRademacher;

/// Bits per storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// `log2(WORD_BITS)`: converts between logical size and word count.
pub(crate) const SHIFT: u32 = WORD_BITS.trailing_zeros();

/// Mask selecting the bit offset within a word.
pub(crate) const BITMASK: usize = WORD_BITS - 1;

/// Integer signs indexed by `sign_index`.
pub(crate) const INT_SIGNS: [i32; 2] = [1, -1];

/// Numeric element types a sign can be multiplied into.
///
/// Implemented for every `Copy` type with a multiplicative identity and
/// negation, which covers all signed integers and floats.
pub trait SignElement: Copy + One + Neg<Output = Self> + MulAssign {}

impl<T> SignElement for T where T: Copy + One + Neg<Output = T> + MulAssign {}

/// Rounds `n` up to the next multiple of [`WORD_BITS`].
///
/// # Examples
///
/// ```rust
/// use projrand_structures::aligned_size;
///
/// assert_eq!(aligned_size(100), 128);
/// assert_eq!(aligned_size(128), 128);
/// assert_eq!(aligned_size(0), 0);
/// ```
#[inline]
pub fn aligned_size(n: usize) -> usize {
    n.div_ceil(WORD_BITS) * WORD_BITS
}

/// Lookup table mapping a sign index to the element value.
#[inline]
pub(crate) fn sign_table<T: SignElement>() -> [T; 2] {
    [T::one(), -T::one()]
}

/// Returns 0 for a set bit (`+1`) and 1 for a clear bit (`-1`).
#[inline(always)]
pub(crate) fn sign_index(word: u64, bit: usize) -> usize {
    (((word >> bit) & 1) ^ 1) as usize
}

/// Multiplies up to 64 elements by the signs packed in `word`.
#[inline]
pub(crate) fn apply_word<T: SignElement>(chunk: &mut [T], word: u64, table: &[T; 2]) {
    for (bit, value) in chunk.iter_mut().enumerate() {
        *value *= table[sign_index(word, bit)];
    }
}

/// Checks that a target of `vector_len` elements fits `capacity` signs.
///
/// A shorter target is allowed and reported as a warning: transforms that
/// operate on sub-blocks apply only a prefix of the signs.
pub(crate) fn check_target(
    vector_len: usize,
    capacity: usize,
) -> Result<(), crate::error::SignVectorError> {
    if vector_len > capacity {
        return Err(crate::error::SignVectorError::capacity(vector_len, capacity));
    }
    if vector_len < capacity {
        tracing::warn!(
            vector_len,
            capacity,
            "sign vector is longer than target; applying to the first {} elements only",
            vector_len
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests;
