//! Deterministic randomness for reproducible sweeps.
//!
//! All ballot sampling draws from a [`VoteRng`]. A simulation engine owns
//! exactly one instance and re-seeds it at the start of every run, which
//! is the single synchronization point establishing reproducibility.
//! Hosts running several sessions concurrently must give each session its
//! own instance; determinism is only guaranteed for one sequential run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Re-seedable pseudo-random source backed by [`StdRng`].
///
/// # Examples
///
/// ```
/// use floorsim::VoteRng;
///
/// let mut a = VoteRng::seeded(7);
/// let mut b = VoteRng::seeded(7);
/// assert_eq!(a.next_uniform(), b.next_uniform());
/// ```
#[derive(Debug, Clone)]
pub struct VoteRng {
    inner: StdRng,
}

impl VoteRng {
    /// Creates a deterministic source from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a non-deterministic source from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Re-seeds the source.
    ///
    /// `None` re-initializes non-deterministically from OS entropy.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.inner = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
    }

    /// Draws one uniform sample in `[0.0, 1.0)`.
    pub fn next_uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

impl Default for VoteRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
