//! Aggregation strategies.
//!
//! A strategy folds the ordered outputs of a voter's signals into one
//! probability. The variant set is closed: sequential chaining,
//! averaging, weighted averaging, and multiplication. Every strategy
//! clamps its final result to `[0, 1]` and yields a neutral 0.5 for an
//! empty signal list.

use crate::context::VoteContext;
use crate::error::{SimulationError, ValidationError};
use crate::signal::{clamp_unit, Signal};
use crate::space::Position;

/// Tolerance for the weighted strategy's sum-to-one check.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Neutral probability returned for an empty signal list.
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Rule for combining an ordered set of signal outputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregation {
    /// Left fold: each signal receives the previous output as its
    /// running base probability. Order-sensitive.
    Sequential,

    /// Arithmetic mean of independently computed outputs.
    Average,

    /// Weighted mean; the weight vector must sum to 1.0 and match the
    /// signal count at evaluation time.
    Weighted {
        /// Per-signal weights, in signal order.
        weights: Vec<f64>,
    },

    /// Product of all outputs; any near-zero signal vetoes the result.
    Multiplicative,
}

impl Aggregation {
    /// Creates a weighted strategy, validating the weight sum.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::WeightSumMismatch` if the weights do
    /// not sum to 1.0 within `1e-6`.
    ///
    /// # Examples
    ///
    /// ```
    /// use floorsim::Aggregation;
    ///
    /// assert!(Aggregation::weighted(vec![0.5, 0.5]).is_ok());
    /// assert!(Aggregation::weighted(vec![0.6, 0.5]).is_err());
    /// ```
    pub fn weighted(weights: Vec<f64>) -> Result<Self, ValidationError> {
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::WeightSumMismatch { sum });
        }
        Ok(Self::Weighted { weights })
    }

    /// Folds the signals' outputs into one probability in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::WeightCountMismatch` if a weighted
    /// strategy's vector does not match the signal count, or any error
    /// raised by an individual signal computation.
    pub fn aggregate(
        &self,
        signals: &[Signal],
        bill_position: &Position,
        ctx: &VoteContext,
    ) -> Result<f64, SimulationError> {
        if signals.is_empty() {
            return Ok(NEUTRAL_PROBABILITY);
        }

        let result = match self {
            Self::Sequential => {
                let mut running = signals[0].compute(bill_position, ctx)?;
                for signal in &signals[1..] {
                    let threaded = ctx.with_base_prob(running);
                    running = signal.compute(bill_position, &threaded)?;
                }
                running
            }
            Self::Average => {
                let mut total = 0.0;
                for signal in signals {
                    total += signal.compute(bill_position, ctx)?;
                }
                #[allow(clippy::cast_precision_loss)]
                let avg = total / signals.len() as f64;
                avg
            }
            Self::Weighted { weights } => {
                if weights.len() != signals.len() {
                    return Err(SimulationError::WeightCountMismatch {
                        weights: weights.len(),
                        signals: signals.len(),
                    });
                }
                let mut total = 0.0;
                for (weight, signal) in weights.iter().zip(signals) {
                    total += weight * signal.compute(bill_position, ctx)?;
                }
                total
            }
            Self::Multiplicative => {
                let mut product = 1.0;
                for signal in signals {
                    product *= signal.compute(bill_position, ctx)?;
                }
                product
            }
        };

        Ok(clamp_unit(result))
    }
}

impl Default for Aggregation {
    fn default() -> Self {
        Self::Sequential
    }
}
