//! Policy-space positions.
//!
//! A [`Position`] is an ordered, fixed-length vector of coordinates in an
//! n-dimensional policy space. Bills, ideal points, and status-quo
//! references all live in the same space; dimensionality is a
//! cross-cutting invariant checked wherever two positions are compared.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, ValidationError};
use crate::rng::VoteRng;

/// A point in n-dimensional policy space.
///
/// # Examples
///
/// ```
/// use floorsim::Position;
///
/// let a = Position::new(vec![0.0, 0.0]);
/// let b = Position::new(vec![3.0, 4.0]);
/// assert_eq!(a.sq_distance(&b).unwrap(), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(Vec<f64>);

impl Position {
    /// Creates a position from raw coordinates.
    #[must_use]
    pub fn new(coords: Vec<f64>) -> Self {
        Self(coords)
    }

    /// Creates an empty (unset) position.
    ///
    /// Empty positions mark references that have not been assigned or
    /// fitted yet; they are skipped by dimension validation.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Creates a position with every coordinate set to `value`.
    #[must_use]
    pub fn uniform(dim: usize, value: f64) -> Self {
        Self(vec![value; dim])
    }

    /// Draws a position with coordinates uniform in `[0.0, 1.0)`.
    #[must_use]
    pub fn random(dim: usize, rng: &mut VoteRng) -> Self {
        Self((0..dim).map(|_| rng.next_uniform()).collect())
    }

    /// Returns the dimensionality.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the position is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Squared Euclidean distance to another position.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::DimensionMismatch` if the two positions
    /// differ in length.
    pub fn sq_distance(&self, other: &Self) -> Result<f64, SimulationError> {
        if self.dim() != other.dim() {
            return Err(SimulationError::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
            });
        }
        Ok(self
            .0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (a - b) * (a - b))
            .sum())
    }

    /// Coordinate-wise mean of a sample of positions.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyFitSample` for an empty sample and
    /// `ValidationError::FitSampleDimensionMismatch` if entries disagree
    /// in length.
    pub fn mean(samples: &[Self]) -> Result<Self, ValidationError> {
        let first = samples.first().ok_or(ValidationError::EmptyFitSample)?;
        let dim = first.dim();
        let mut sums = vec![0.0; dim];
        for sample in samples {
            if sample.dim() != dim {
                return Err(ValidationError::FitSampleDimensionMismatch {
                    expected: dim,
                    actual: sample.dim(),
                });
            }
            for (sum, coord) in sums.iter_mut().zip(&sample.0) {
                *sum += coord;
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let n = samples.len() as f64;
        Ok(Self(sums.into_iter().map(|s| s / n).collect()))
    }
}

impl From<Vec<f64>> for Position {
    fn from(coords: Vec<f64>) -> Self {
        Self(coords)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, coord) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coord:.3}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sq_distance_is_zero_for_identical_points() {
        let p = Position::new(vec![0.2, 0.8, 0.5]);
        assert_eq!(p.sq_distance(&p).unwrap(), 0.0);
    }

    #[test]
    fn sq_distance_rejects_mismatched_dims() {
        let a = Position::new(vec![0.0, 0.0]);
        let b = Position::new(vec![0.0, 0.0, 0.0]);
        let err = a.sq_distance(&b).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn mean_of_sample() {
        let samples = vec![
            Position::new(vec![0.0, 1.0]),
            Position::new(vec![1.0, 0.0]),
            Position::new(vec![0.5, 0.5]),
        ];
        let mean = Position::mean(&samples).unwrap();
        assert_eq!(mean, Position::new(vec![0.5, 0.5]));
    }

    #[test]
    fn mean_of_empty_sample_fails() {
        assert!(matches!(
            Position::mean(&[]),
            Err(ValidationError::EmptyFitSample)
        ));
    }

    #[test]
    fn mean_rejects_inconsistent_sample() {
        let samples = vec![Position::new(vec![0.0, 1.0]), Position::new(vec![1.0])];
        assert!(matches!(
            Position::mean(&samples),
            Err(ValidationError::FitSampleDimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn random_respects_dim_and_range() {
        let mut rng = VoteRng::seeded(5);
        let p = Position::random(6, &mut rng);
        assert_eq!(p.dim(), 6);
        assert!(p.as_slice().iter().all(|c| (0.0..1.0).contains(c)));
    }

    #[test]
    fn display_is_compact() {
        let p = Position::new(vec![0.25, 0.75]);
        assert_eq!(format!("{p}"), "[0.250, 0.750]");
    }
}
