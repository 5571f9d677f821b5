//! Sign-vector construction configuration.
//!
//! This module provides a validated configuration and builder for
//! [`CompactRademacher`](crate::CompactRademacher) construction.

use projrand_core::SeedPolicy;

use crate::error::SignVectorError;
use crate::rademacher::WORD_BITS;

/// Default logical vector size used by the transform benchmarks.
pub const DEFAULT_VECTOR_SIZE: usize = 1 << 16;

/// Default iteration count used by the transform benchmarks.
pub const DEFAULT_ITERATIONS: usize = 1_000;

/// Validated sign-vector configuration.
///
/// Use [`SignVectorConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use projrand_structures::SignVectorConfig;
///
/// let config = SignVectorConfig::builder()
///     .size(4096)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.size(), 4096);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignVectorConfig {
    /// Logical number of signs.
    size: usize,
    /// Seed source.
    seed: SeedPolicy,
}

impl SignVectorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SignVectorConfigBuilder {
        SignVectorConfigBuilder::default()
    }

    /// Returns the logical number of signs.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the seed policy.
    #[inline]
    pub fn seed_policy(&self) -> SeedPolicy {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SignVectorError::InvalidSize` if `size` is not a multiple
    /// of [`WORD_BITS`].
    pub fn validate(&self) -> Result<(), SignVectorError> {
        if self.size % WORD_BITS != 0 {
            return Err(SignVectorError::invalid_size(self.size));
        }
        Ok(())
    }
}

impl Default for SignVectorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_VECTOR_SIZE,
            seed: SeedPolicy::Entropy,
        }
    }
}

/// Builder for [`SignVectorConfig`].
#[derive(Clone, Debug, Default)]
pub struct SignVectorConfigBuilder {
    size: Option<usize>,
    seed: SeedPolicy,
}

impl SignVectorConfigBuilder {
    /// Sets the logical number of signs (must be a multiple of 64).
    #[inline]
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Fixes the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = SeedPolicy::Fixed(seed);
        self
    }

    /// Sets the seed policy directly.
    #[inline]
    pub fn seed_policy(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// Size defaults to [`DEFAULT_VECTOR_SIZE`], seed to runtime entropy.
    ///
    /// # Errors
    ///
    /// Returns `SignVectorError::InvalidSize` for misaligned sizes.
    pub fn build(self) -> Result<SignVectorConfig, SignVectorError> {
        let config = SignVectorConfig {
            size: self.size.unwrap_or(DEFAULT_VECTOR_SIZE),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
