//! Spatial-utility ideal-point encoder.
//!
//! The classic spatial voting model: a voter prefers the bill to the
//! status quo when the bill sits closer to the voter's ideal point. The
//! utility gain (squared distance to the status quo minus squared
//! distance to the bill) passes through a logistic transform, so a bill
//! exactly as attractive as the status quo yields 0.5.

use crate::error::{SimulationError, ValidationError};
use crate::space::Position;

/// Ideal-point encoder signal.
///
/// Holds a fixed ideal position and a status-quo reference. Both may be
/// left unset and later derived from a sample via [`IdealPointSignal::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct IdealPointSignal {
    ideal: Position,
    status_quo: Position,
    // Cached squared distance ideal -> status quo, filled by compile().
    reference_distance: Option<f64>,
}

impl IdealPointSignal {
    /// Creates an encoder from an ideal point and a status-quo reference.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PositionDimensionMismatch` if both
    /// positions are set and disagree in length.
    pub fn new(ideal: Position, status_quo: Position) -> Result<Self, ValidationError> {
        if !ideal.is_empty() && !status_quo.is_empty() && ideal.dim() != status_quo.dim() {
            return Err(ValidationError::PositionDimensionMismatch {
                expected: ideal.dim(),
                actual: status_quo.dim(),
            });
        }
        Ok(Self {
            ideal,
            status_quo,
            reference_distance: None,
        })
    }

    /// Creates an unfitted encoder awaiting [`IdealPointSignal::fit`].
    #[must_use]
    pub const fn unfitted() -> Self {
        Self {
            ideal: Position::empty(),
            status_quo: Position::empty(),
            reference_distance: None,
        }
    }

    /// The ideal point (empty when unfitted).
    #[must_use]
    pub const fn ideal(&self) -> &Position {
        &self.ideal
    }

    /// The status-quo reference (empty when unfitted).
    #[must_use]
    pub const fn status_quo(&self) -> &Position {
        &self.status_quo
    }

    /// Fits the ideal point to the coordinate-wise mean of `samples`.
    ///
    /// The status quo is also set to the mean when it was unset;
    /// an explicitly assigned status quo is left alone.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyFitSample` for an empty sample,
    /// `ValidationError::FitSampleDimensionMismatch` if entries disagree
    /// in length, and `ValidationError::PositionDimensionMismatch` if the
    /// fitted mean disagrees with a previously assigned status quo.
    pub fn fit(&mut self, samples: &[Position]) -> Result<(), ValidationError> {
        let mean = Position::mean(samples)?;
        if !self.status_quo.is_empty() && self.status_quo.dim() != mean.dim() {
            return Err(ValidationError::PositionDimensionMismatch {
                expected: self.status_quo.dim(),
                actual: mean.dim(),
            });
        }
        if self.status_quo.is_empty() {
            self.status_quo = mean.clone();
        }
        self.ideal = mean;
        self.reference_distance = None;
        Ok(())
    }

    /// Precomputes the ideal-to-status-quo distance. Idempotent.
    pub(crate) fn compile(&mut self) {
        if self.reference_distance.is_none() && !self.ideal.is_empty() {
            self.reference_distance = self.ideal.sq_distance(&self.status_quo).ok();
        }
    }

    /// Computes the encoder's probability for a bill position.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::DimensionMismatch` if the ideal point
    /// and either reference disagree in length with each other or with
    /// `bill_position`.
    pub(crate) fn compute(&self, bill_position: &Position) -> Result<f64, SimulationError> {
        let reference = match self.reference_distance {
            Some(cached) => cached,
            None => self.ideal.sq_distance(&self.status_quo)?,
        };
        let delta_utility = reference - self.ideal.sq_distance(bill_position)?;
        Ok(sigmoid(delta_utility))
    }
}

fn sigmoid(t: f64) -> f64 {
    1.0 / (1.0 + (-t).exp())
}
