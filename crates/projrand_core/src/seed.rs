//! Seed selection.
//!
//! A seed is an opaque 64-bit value. Callers either fix it for reproducible
//! runs or let it be drawn from runtime entropy.

/// Draws a fresh seed from the thread-local entropy-seeded generator.
#[inline]
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// How a component should obtain its seed.
///
/// # Examples
///
/// ```rust
/// use projrand_core::SeedPolicy;
///
/// assert_eq!(SeedPolicy::Fixed(7).resolve(), 7);
/// assert_eq!(SeedPolicy::from(Some(3)), SeedPolicy::Fixed(3));
/// assert_eq!(SeedPolicy::from(None), SeedPolicy::Entropy);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeedPolicy {
    /// Use exactly this seed.
    Fixed(u64),
    /// Draw a seed from runtime entropy at resolution time.
    #[default]
    Entropy,
}

impl SeedPolicy {
    /// Returns a concrete seed.
    ///
    /// `Entropy` draws a new value on every call.
    #[inline]
    pub fn resolve(self) -> u64 {
        match self {
            Self::Fixed(seed) => seed,
            Self::Entropy => entropy_seed(),
        }
    }

    /// Returns `true` for [`SeedPolicy::Fixed`].
    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl From<Option<u64>> for SeedPolicy {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Fixed)
    }
}

impl From<u64> for SeedPolicy {
    fn from(seed: u64) -> Self {
        Self::Fixed(seed)
    }
}
