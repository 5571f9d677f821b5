//! # projrand_core: Random Engines for Structured Projections
//!
//! ## Layer 1 (Foundation) Role
//!
//! projrand_core is the bottom layer of the workspace. It provides the 64-bit
//! pseudo-random engines consumed by the sign vectors and random streams in
//! `projrand_structures`:
//! - [`RandomEngine`] / [`SeedableEngine`]: the engine capability traits
//! - [`TwisterEngine`]: 64-bit Mersenne Twister (MT19937-64)
//! - [`RngEngine`]: adapter for any `rand` generator (e.g. [`StdEngine`])
//! - [`ThreadsafeEngine`]: lock-serialised engine shared across threads
//! - [`SeedPolicy`]: fixed or entropy-derived seeds
//!
//! ## No Global State
//!
//! There is no process-wide default engine. Callers construct an engine and
//! pass it by ownership or reference to whatever consumes it.
//!
//! ## Usage Example
//!
//! ```rust
//! use projrand_core::{RandomEngine, SeedableEngine, TwisterEngine};
//!
//! let mut engine = TwisterEngine::from_seed(42);
//! let first = engine.next();
//!
//! let mut buffer = [0u64; 8];
//! engine.reseed(42);
//! engine.fill(&mut buffer);
//! assert_eq!(buffer[0], first);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod engine;
pub mod seed;

pub use engine::{
    to_unit_interval, RandomEngine, RngEngine, SeedableEngine, StdEngine, ThreadsafeEngine,
    TwisterEngine,
};
pub use seed::{entropy_seed, SeedPolicy};
