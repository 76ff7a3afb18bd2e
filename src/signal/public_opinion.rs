//! Public-opinion influence.

use crate::context::VoteContext;
use crate::error::{ensure_unit, ValidationError};
use crate::signal::clamp_unit;

/// Blends the running probability toward a fixed public support level
/// with equal weight.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicOpinionSignal {
    support_level: f64,
}

impl PublicOpinionSignal {
    /// Creates a public-opinion signal.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if `support_level` is
    /// outside `[0, 1]`.
    pub fn new(support_level: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            support_level: ensure_unit("support_level", support_level)?,
        })
    }

    /// Public support level in `[0, 1]`.
    #[must_use]
    pub const fn support_level(&self) -> f64 {
        self.support_level
    }

    /// Updates the support level.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` outside `[0, 1]`.
    pub fn set_support_level(&mut self, support_level: f64) -> Result<(), ValidationError> {
        self.support_level = ensure_unit("support_level", support_level)?;
        Ok(())
    }

    pub(crate) fn compute(&self, ctx: &VoteContext) -> f64 {
        clamp_unit(0.5 * ctx.base_or_neutral() + 0.5 * self.support_level)
    }
}
