//! # projrand_structures: Random Structure for Fast Transforms
//!
//! ## Layer 2 Role
//!
//! projrand_structures builds the pseudo-random structure consumed by
//! structured random projections and kernel-approximation features on top of
//! the engines in `projrand_core`:
//! - [`CompactRademacher`]: bit-packed ±1 vector applied in place
//! - [`SeededRademacher`]: the same signs without storage
//! - [`PrnSequence`]: lazy, restartable stream of distribution samples
//!
//! The fast Hadamard transform and dense linear algebra are out of scope;
//! numeric vectors are plain slices, so any contiguous container works.
//!
//! ## Determinism
//!
//! Identical seed and size give bit-identical output for every structure in
//! this crate.
//!
//! ## Usage Example
//!
//! ```rust
//! use projrand_structures::{CompactRademacher, PrnSequence, SignVectorError};
//!
//! let signs: CompactRademacher = CompactRademacher::new(1024, 42)?;
//! let mut block = vec![0.5_f32; 1024];
//! signs.apply(&mut block)?;
//!
//! let mut stream: PrnSequence = PrnSequence::with_seed(8, 42);
//! let first_pass: Vec<u64> = stream.pass().collect();
//! let second_pass: Vec<u64> = stream.pass().collect();
//! assert_eq!(first_pass, second_pass);
//! # Ok::<(), SignVectorError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod rademacher;
pub mod sequence;

pub use config::{
    SignVectorConfig, SignVectorConfigBuilder, DEFAULT_ITERATIONS, DEFAULT_VECTOR_SIZE,
};
pub use error::SignVectorError;
pub use rademacher::{
    aligned_size, CompactRademacher, SeededRademacher, SignElement, SignView, WORD_BITS,
};
pub use sequence::{
    MapDistribution, PrnPass, PrnSequence, Sampled, StreamDistribution, UnchangedDistribution,
    UnitDistribution,
};

pub use projrand_core::SeedPolicy;
