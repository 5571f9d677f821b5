//! Error types for sign-vector construction and application.
//!
//! This module provides structured error handling for the bit-packed sign
//! vectors with the offending sizes attached to each variant.

use thiserror::Error;

/// Errors raised by sign-vector construction, resizing and application.
///
/// # Variants
///
/// - `InvalidSize`: logical length is not a multiple of the word width
/// - `Capacity`: target vector is longer than the sign vector
/// - `OutOfMemory`: storage allocation failed
/// - `LengthMismatch`: input and output buffers differ in length
///
/// # Examples
///
/// ```
/// use projrand_structures::SignVectorError;
///
/// let err = SignVectorError::invalid_size(100);
/// assert!(format!("{}", err).contains("100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignVectorError {
    /// Requested logical length is not a multiple of the word width.
    #[error("Invalid size {requested}: must be a multiple of the {word_bits}-bit word width")]
    InvalidSize {
        /// Requested number of logical elements
        requested: usize,
        /// Bits per storage word
        word_bits: usize,
    },

    /// Target vector has elements with no corresponding sign.
    #[error("Vector length {vector_len} exceeds sign vector size {capacity}")]
    Capacity {
        /// Length of the target vector
        vector_len: usize,
        /// Number of signs available
        capacity: usize,
    },

    /// Storage for the packed words could not be allocated.
    #[error("Out of memory allocating {words} storage words")]
    OutOfMemory {
        /// Number of 64-bit words requested
        words: usize,
    },

    /// Input and output buffers of a copying apply differ in length.
    #[error("Length mismatch: input has {input} elements, output has {output}")]
    LengthMismatch {
        /// Input length
        input: usize,
        /// Output length
        output: usize,
    },
}

impl SignVectorError {
    /// Create an invalid size error for the standard word width.
    pub fn invalid_size(requested: usize) -> Self {
        Self::InvalidSize {
            requested,
            word_bits: crate::rademacher::WORD_BITS,
        }
    }

    /// Create a capacity error.
    pub fn capacity(vector_len: usize, capacity: usize) -> Self {
        Self::Capacity {
            vector_len,
            capacity,
        }
    }

    /// Create an out-of-memory error.
    pub fn out_of_memory(words: usize) -> Self {
        Self::OutOfMemory { words }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(input: usize, output: usize) -> Self {
        Self::LengthMismatch { input, output }
    }
}
