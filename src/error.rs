//! Error types for floorsim.
//!
//! All errors are strongly typed using thiserror. Construction-time
//! problems (out-of-range parameters, misconfigured strategies, bad
//! training samples) are [`ValidationError`]; problems raised while
//! casting votes (dimension mismatches, weight-count mismatches) are
//! [`SimulationError`]. Both fold into the top-level [`FloorsimError`].

use thiserror::Error;

/// Validation errors raised when constructing or mutating entities.
///
/// None of these are recoverable by retrying: the caller must fix the
/// offending parameter. Out-of-range scalars are never silently clamped
/// at the API boundary.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A scalar parameter lies outside its declared bound.
    #[error("{name} value {value} is out of range [{min}, {max}]")]
    ScalarOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },

    /// Two positions supplied at construction disagree in length.
    #[error("position has {actual} dimensions, expected {expected}")]
    PositionDimensionMismatch {
        /// Dimensionality the entity expects.
        expected: usize,
        /// Dimensionality that was supplied.
        actual: usize,
    },

    /// Aggregation weights do not sum to 1.0 within tolerance.
    #[error("aggregation weights must sum to 1.0, got {sum}")]
    WeightSumMismatch {
        /// The actual weight sum.
        sum: f64,
    },

    /// A weighted aggregation was requested without a weight vector.
    #[error("aggregation weights must be provided for the weighted strategy")]
    MissingAggregationWeights,

    /// A fitting procedure was handed an empty sample.
    #[error("cannot fit from an empty sample")]
    EmptyFitSample,

    /// A fitting sample holds positions of inconsistent dimensionality.
    #[error("fit sample entry has {actual} dimensions, expected {expected}")]
    FitSampleDimensionMismatch {
        /// Dimensionality of the first sample entry.
        expected: usize,
        /// Dimensionality of the inconsistent entry.
        actual: usize,
    },
}

/// Errors raised while casting votes or aggregating signals.
///
/// A simulation error fails the entire vote-casting call, not just the
/// offending voter, and leaves proposal tallies untouched.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Two positions compared during signal evaluation differ in length.
    #[error("dimension mismatch: position has {actual} dimensions, expected {expected}")]
    DimensionMismatch {
        /// Dimensionality of the left-hand position.
        expected: usize,
        /// Dimensionality of the right-hand position.
        actual: usize,
    },

    /// A voter's ideal point disagrees with the bill position being voted on.
    #[error(
        "voter '{voter}' holds an ideal point with {actual} dimensions, \
         but the bill position has {expected}"
    )]
    VoterDimensionMismatch {
        /// Display name of the offending voter.
        voter: String,
        /// Dimensionality of the bill position.
        expected: usize,
        /// Dimensionality of the voter's ideal point.
        actual: usize,
    },

    /// A weighted aggregation's weight vector does not match its signal count.
    #[error("aggregation has {weights} weights for {signals} signals")]
    WeightCountMismatch {
        /// Length of the weight vector.
        weights: usize,
        /// Number of signals being aggregated.
        signals: usize,
    },
}

/// Top-level error type for floorsim.
#[derive(Debug, Error)]
pub enum FloorsimError {
    /// A construction-time validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A vote-time simulation failure.
    #[error("simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

impl FloorsimError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a simulation error.
    #[must_use]
    pub const fn is_simulation(&self) -> bool {
        matches!(self, Self::Simulation(_))
    }
}

/// Result type alias for floorsim operations.
pub type FloorsimResult<T> = Result<T, FloorsimError>;

/// Checks that `value` lies in `[0.0, 1.0]`.
pub(crate) fn ensure_unit(name: &'static str, value: f64) -> Result<f64, ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::ScalarOutOfRange {
            name,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

/// Checks that `value` lies in `[-1.0, 1.0]`.
pub(crate) fn ensure_signed_unit(name: &'static str, value: f64) -> Result<f64, ValidationError> {
    if (-1.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::ScalarOutOfRange {
            name,
            value,
            min: -1.0,
            max: 1.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_out_of_range_display() {
        let err = ensure_unit("support_level", 1.5).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("support_level"));
        assert!(msg.contains("1.5"));
        assert!(msg.contains("out of range"));
    }

    #[test]
    fn test_unit_range_accepts_bounds() {
        assert!(ensure_unit("x", 0.0).is_ok());
        assert!(ensure_unit("x", 1.0).is_ok());
        assert!(ensure_unit("x", -0.001).is_err());
        assert!(ensure_unit("x", f64::NAN).is_err());
    }

    #[test]
    fn test_signed_unit_range() {
        assert!(ensure_signed_unit("stance", -1.0).is_ok());
        assert!(ensure_signed_unit("stance", 1.0).is_ok());
        assert!(ensure_signed_unit("stance", -1.1).is_err());
    }

    #[test]
    fn test_umbrella_classifiers() {
        let v: FloorsimError = ValidationError::EmptyFitSample.into();
        let s: FloorsimError = SimulationError::DimensionMismatch {
            expected: 2,
            actual: 3,
        }
        .into();
        assert!(v.is_validation());
        assert!(!v.is_simulation());
        assert!(s.is_simulation());
    }

    #[test]
    fn test_voter_dimension_mismatch_display() {
        let err = SimulationError::VoterDimensionMismatch {
            voter: "Rep-7".to_string(),
            expected: 2,
            actual: 3,
        };
        let msg = format!("{err}");
        assert!(msg.contains("Rep-7"));
        assert!(msg.contains('2'));
        assert!(msg.contains('3'));
    }
}
