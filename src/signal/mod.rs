//! Influence signals.
//!
//! A signal computes one contribution to a voter's yes-probability from
//! the bill's position and the shared ballot context. The set of signal
//! kinds is closed and known at design time, so dispatch is an
//! exhaustive match over [`SignalKind`] rather than open subclassing.
//!
//! Signals are stateless per call: any internally held reference data
//! (an encoder's fitted point, a lobbying roster) is set up front and
//! treated as read-only during simulation. Each signal also exposes a
//! one-time [`Signal::compile`] step for precomputation; compiling is
//! idempotent and may be called any number of times.

pub mod ideal_point;
pub mod lobbying;
pub mod media;
pub mod party;
pub mod public_opinion;

use std::fmt;

use crate::context::VoteContext;
use crate::error::{SimulationError, ValidationError};
use crate::ident::{IdIssuer, SignalId};
use crate::space::Position;

pub use ideal_point::IdealPointSignal;
pub use lobbying::LobbyingSignal;
pub use media::MediaPressureSignal;
pub use party::PartyDisciplineSignal;
pub use public_opinion::PublicOpinionSignal;

/// The closed set of influence-signal variants.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalKind {
    /// Spatial-utility encoder over ideal and status-quo points.
    IdealPoint(IdealPointSignal),

    /// Blend toward a fixed public support level.
    PublicOpinion(PublicOpinionSignal),

    /// Signed lobbying pressure with optional external participants.
    Lobbying(LobbyingSignal),

    /// Signed media pressure nudged by speaker and president.
    MediaPressure(MediaPressureSignal),

    /// Convex pull toward the party line, weighted by discipline.
    PartyDiscipline(PartyDisciplineSignal),
}

impl SignalKind {
    /// Default display name for this kind.
    #[must_use]
    pub const fn default_name(&self) -> &'static str {
        match self {
            Self::IdealPoint(_) => "IdealPoint",
            Self::PublicOpinion(_) => "PublicOpinion",
            Self::Lobbying(_) => "Lobbying",
            Self::MediaPressure(_) => "MediaPressure",
            Self::PartyDiscipline(_) => "PartyDiscipline",
        }
    }
}

/// One unit of influence on a voter's yes-probability.
///
/// Wraps a [`SignalKind`] with identity, a display name, and the
/// declared input/output dimensionality. The declared dimensions are
/// descriptive; the only numerically enforced check is position length.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    id: SignalId,
    name: String,
    input_dim: usize,
    output_dim: usize,
    kind: SignalKind,
}

impl Signal {
    /// Wraps a kind with a freshly issued id and its default name.
    #[must_use]
    pub fn new(issuer: &IdIssuer, kind: SignalKind) -> Self {
        let input_dim = match &kind {
            SignalKind::IdealPoint(ip) if !ip.ideal().is_empty() => ip.ideal().dim(),
            _ => 2,
        };
        Self {
            id: issuer.next_signal_id(),
            name: kind.default_name().to_string(),
            input_dim,
            output_dim: 1,
            kind,
        }
    }

    /// Wraps a kind under an explicit display name.
    #[must_use]
    pub fn named(issuer: &IdIssuer, name: impl Into<String>, kind: SignalKind) -> Self {
        let mut signal = Self::new(issuer, kind);
        signal.name = name.into();
        signal
    }

    /// Creates an ideal-point encoder signal.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PositionDimensionMismatch` if the two
    /// positions are both set and disagree in length.
    pub fn ideal_point(
        issuer: &IdIssuer,
        ideal: Position,
        status_quo: Position,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            issuer,
            SignalKind::IdealPoint(IdealPointSignal::new(ideal, status_quo)?),
        ))
    }

    /// Creates a public-opinion signal.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if `support_level` is
    /// outside `[0, 1]`.
    pub fn public_opinion(issuer: &IdIssuer, support_level: f64) -> Result<Self, ValidationError> {
        Ok(Self::new(
            issuer,
            SignalKind::PublicOpinion(PublicOpinionSignal::new(support_level)?),
        ))
    }

    /// Creates a lobbying signal.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if `intensity` is
    /// outside `[0, 1]`.
    pub fn lobbying(issuer: &IdIssuer, intensity: f64) -> Result<Self, ValidationError> {
        Ok(Self::new(
            issuer,
            SignalKind::Lobbying(LobbyingSignal::new(intensity)?),
        ))
    }

    /// Creates a media-pressure signal.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if `pressure` is
    /// outside `[-1, 1]`.
    pub fn media_pressure(issuer: &IdIssuer, pressure: f64) -> Result<Self, ValidationError> {
        Ok(Self::new(
            issuer,
            SignalKind::MediaPressure(MediaPressureSignal::new(pressure)?),
        ))
    }

    /// Creates a party-discipline signal.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if either scalar is
    /// outside `[0, 1]`.
    pub fn party_discipline(
        issuer: &IdIssuer,
        discipline_base_strength: f64,
        party_line_support: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            issuer,
            SignalKind::PartyDiscipline(PartyDisciplineSignal::new(
                discipline_base_strength,
                party_line_support,
            )?),
        ))
    }

    /// The signal's id.
    #[must_use]
    pub const fn id(&self) -> SignalId {
        self.id
    }

    /// The signal's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared input dimensionality.
    #[must_use]
    pub const fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Declared output dimensionality.
    #[must_use]
    pub const fn output_dim(&self) -> usize {
        self.output_dim
    }

    /// The wrapped variant.
    #[must_use]
    pub const fn kind(&self) -> &SignalKind {
        &self.kind
    }

    /// Mutable access to the wrapped variant.
    pub fn kind_mut(&mut self) -> &mut SignalKind {
        &mut self.kind
    }

    /// Computes this signal's contribution for a ballot.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::DimensionMismatch` if a positional
    /// comparison inside the signal disagrees in length.
    pub fn compute(
        &self,
        bill_position: &Position,
        ctx: &VoteContext,
    ) -> Result<f64, SimulationError> {
        match &self.kind {
            SignalKind::IdealPoint(signal) => signal.compute(bill_position),
            SignalKind::PublicOpinion(signal) => Ok(signal.compute(ctx)),
            SignalKind::Lobbying(signal) => Ok(signal.compute(ctx)),
            SignalKind::MediaPressure(signal) => Ok(signal.compute(ctx)),
            SignalKind::PartyDiscipline(signal) => Ok(signal.compute(ctx)),
        }
    }

    /// Runs the signal's one-time precomputation.
    ///
    /// Idempotent: compiling twice changes nothing.
    pub fn compile(&mut self) {
        match &mut self.kind {
            SignalKind::IdealPoint(signal) => signal.compile(),
            SignalKind::PublicOpinion(_)
            | SignalKind::Lobbying(_)
            | SignalKind::MediaPressure(_)
            | SignalKind::PartyDiscipline(_) => {}
        }
    }

    /// The dimensionality of this signal's ideal point, when it carries
    /// a fitted one. Used by the chamber's pre-vote validation.
    #[must_use]
    pub fn positional_dim(&self) -> Option<usize> {
        match &self.kind {
            SignalKind::IdealPoint(signal) if !signal.ideal().is_empty() => {
                Some(signal.ideal().dim())
            }
            _ => None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (signal {})", self.name, self.id)
    }
}

/// Clamps a derived probability to `[0.0, 1.0]`.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Clamps a derived signed pressure to `[-1.0, 1.0]`.
pub(crate) fn clamp_signed_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Applies signed pressure asymmetrically to a base probability.
///
/// Non-negative pressure scales the remaining gap to 1.0; negative
/// pressure scales the current probability down.
pub(crate) fn apply_pressure(base_prob: f64, pressure: f64) -> f64 {
    if pressure >= 0.0 {
        base_prob + (1.0 - base_prob) * pressure
    } else {
        base_prob * (1.0 + pressure)
    }
}
