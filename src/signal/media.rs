//! Media pressure.
//!
//! Signed pressure in `[-1, 1]`: positive values push toward support,
//! negative toward opposition. The configured base pressure is nudged by
//! the speaker's agenda support and the president's approval rating when
//! those are present in the ballot context; each contributes
//! `0.2 * (value - 0.5)`.

use crate::context::VoteContext;
use crate::error::{ensure_signed_unit, ValidationError};
use crate::signal::{apply_pressure, clamp_signed_unit, clamp_unit};

/// Media-pressure influence signal.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPressureSignal {
    pressure: f64,
}

impl MediaPressureSignal {
    /// Creates a media-pressure signal.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if `pressure` is
    /// outside `[-1, 1]`.
    pub fn new(pressure: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            pressure: ensure_signed_unit("pressure", pressure)?,
        })
    }

    /// Base media pressure in `[-1, 1]`.
    #[must_use]
    pub const fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Updates the base pressure.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` outside `[-1, 1]`.
    pub fn set_pressure(&mut self, pressure: f64) -> Result<(), ValidationError> {
        self.pressure = ensure_signed_unit("pressure", pressure)?;
        Ok(())
    }

    pub(crate) fn compute(&self, ctx: &VoteContext) -> f64 {
        let mut adjustment = 0.0;
        if let Some(agenda) = ctx.speaker_agenda_support {
            adjustment += 0.2 * (clamp_unit(agenda) - 0.5);
        }
        if let Some(approval) = ctx.president_approval {
            adjustment += 0.2 * (clamp_unit(approval) - 0.5);
        }
        let pressure = clamp_signed_unit(self.pressure + adjustment);
        clamp_unit(apply_pressure(ctx.base_or_neutral(), pressure))
    }
}
