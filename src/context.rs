//! Shared ballot context.
//!
//! Signals read contextual values they understand and ignore the rest.
//! The context is an explicit structure with named optional fields; a
//! missing field falls back to its stated default rather than failing.

/// Contextual values threaded through every signal evaluation.
///
/// The chamber fills in the speaker and president fields from its
/// attached roles when the caller leaves them unset. The sequential
/// aggregation strategy threads the running probability through
/// `base_prob`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VoteContext {
    /// Running base probability under sequential composition.
    pub base_prob: Option<f64>,

    /// The speaker's agenda support in `[0, 1]`.
    pub speaker_agenda_support: Option<f64>,

    /// The president's approval rating in `[0, 1]`.
    pub president_approval: Option<f64>,
}

impl VoteContext {
    /// Default base probability used when none has been threaded yet.
    pub const NEUTRAL_BASE_PROB: f64 = 0.5;

    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the running base probability set.
    #[must_use]
    pub const fn with_base_prob(mut self, base_prob: f64) -> Self {
        self.base_prob = Some(base_prob);
        self
    }

    /// Returns a copy with the speaker agenda support set.
    #[must_use]
    pub const fn with_speaker_agenda_support(mut self, support: f64) -> Self {
        self.speaker_agenda_support = Some(support);
        self
    }

    /// Returns a copy with the presidential approval rating set.
    #[must_use]
    pub const fn with_president_approval(mut self, approval: f64) -> Self {
        self.president_approval = Some(approval);
        self
    }

    /// The running base probability, or the neutral default.
    #[must_use]
    pub fn base_or_neutral(&self) -> f64 {
        self.base_prob.unwrap_or(Self::NEUTRAL_BASE_PROB)
    }
}
