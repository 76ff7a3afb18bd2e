//! Voters.
//!
//! A voter owns an ordered list of influence signals and an aggregation
//! strategy. Casting a ballot computes the aggregate probability and
//! draws one uniform sample against it. A voter holding no signals falls
//! back to its static yes-chance.

use crate::aggregation::Aggregation;
use crate::context::VoteContext;
use crate::error::{ensure_unit, SimulationError, ValidationError};
use crate::ident::{ActorId, IdIssuer, SignalId};
use crate::rng::VoteRng;
use crate::signal::Signal;
use crate::space::Position;

/// A decision actor casting yes/no ballots.
#[derive(Debug, Clone, PartialEq)]
pub struct Voter {
    id: ActorId,
    name: String,
    signals: Vec<Signal>,
    strategy: Aggregation,
    yes_chance: f64,
}

impl Voter {
    /// Creates a voter with no signals, the sequential strategy, and a
    /// neutral fallback yes-chance of 0.5.
    ///
    /// An empty name defaults to `Voter_{id}`.
    #[must_use]
    pub fn new(issuer: &IdIssuer, name: impl Into<String>) -> Self {
        let id = issuer.next_actor_id();
        let name = name.into();
        Self {
            id,
            name: if name.is_empty() {
                format!("Voter_{id}")
            } else {
                name
            },
            signals: Vec::new(),
            strategy: Aggregation::default(),
            yes_chance: 0.5,
        }
    }

    /// Replaces the aggregation strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Aggregation) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the fallback yes-chance used when the voter holds no signals.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if `yes_chance` is
    /// outside `[0, 1]`.
    pub fn with_yes_chance(mut self, yes_chance: f64) -> Result<Self, ValidationError> {
        self.yes_chance = ensure_unit("yes_chance", yes_chance)?;
        Ok(self)
    }

    /// The voter's id.
    #[must_use]
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// The voter's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered signal list.
    #[must_use]
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Mutable access to the ordered signal list.
    pub fn signals_mut(&mut self) -> &mut [Signal] {
        &mut self.signals
    }

    /// The bound aggregation strategy.
    #[must_use]
    pub const fn strategy(&self) -> &Aggregation {
        &self.strategy
    }

    /// The fallback yes-chance.
    #[must_use]
    pub const fn yes_chance(&self) -> f64 {
        self.yes_chance
    }

    /// Returns true if the voter holds at least one signal.
    #[must_use]
    pub fn has_signals(&self) -> bool {
        !self.signals.is_empty()
    }

    /// Appends a signal to the end of the list.
    pub fn add_signal(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    /// Removes the first signal with the given id.
    ///
    /// Returns true if one was removed; a no-op when absent.
    pub fn remove_signal(&mut self, id: SignalId) -> bool {
        if let Some(index) = self.signals.iter().position(|s| s.id() == id) {
            self.signals.remove(index);
            true
        } else {
            false
        }
    }

    /// Replaces the aggregation strategy in place.
    pub fn set_strategy(&mut self, strategy: Aggregation) {
        self.strategy = strategy;
    }

    /// Computes the voter's aggregate yes-probability for a ballot.
    ///
    /// Falls back to the static yes-chance when the signal list is empty.
    ///
    /// # Errors
    ///
    /// Propagates any signal or strategy evaluation error.
    pub fn decision_probability(
        &self,
        bill_position: &Position,
        ctx: &VoteContext,
    ) -> Result<f64, SimulationError> {
        if self.signals.is_empty() {
            return Ok(self.yes_chance);
        }
        self.strategy.aggregate(&self.signals, bill_position, ctx)
    }

    /// Casts one ballot: yes iff a fresh uniform sample is strictly
    /// below the aggregate probability.
    ///
    /// # Errors
    ///
    /// Propagates any signal or strategy evaluation error.
    pub fn cast_vote(
        &self,
        bill_position: &Position,
        ctx: &VoteContext,
        rng: &mut VoteRng,
    ) -> Result<bool, SimulationError> {
        let probability = self.decision_probability(bill_position, ctx)?;
        Ok(rng.next_uniform() < probability)
    }

    /// Compiles every held signal. Idempotent.
    pub fn compile(&mut self) {
        for signal in &mut self.signals {
            signal.compile();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signalless_voter_uses_fallback_chance() {
        let issuer = IdIssuer::new();
        let position = Position::new(vec![0.5]);
        let ctx = VoteContext::new();
        let mut rng = VoteRng::seeded(1);

        let always = Voter::new(&issuer, "Aye")
            .with_yes_chance(1.0)
            .unwrap();
        let never = Voter::new(&issuer, "Nay")
            .with_yes_chance(0.0)
            .unwrap();

        for _ in 0..50 {
            assert!(always.cast_vote(&position, &ctx, &mut rng).unwrap());
            assert!(!never.cast_vote(&position, &ctx, &mut rng).unwrap());
        }
    }

    #[test]
    fn yes_chance_is_validated() {
        let issuer = IdIssuer::new();
        assert!(Voter::new(&issuer, "").with_yes_chance(1.5).is_err());
    }

    #[test]
    fn remove_signal_removes_exactly_one_match() {
        let issuer = IdIssuer::new();
        let mut voter = Voter::new(&issuer, "Rep");
        let first = Signal::public_opinion(&issuer, 0.4).unwrap();
        let second = Signal::public_opinion(&issuer, 0.6).unwrap();
        let second_id = second.id();
        voter.add_signal(first);
        voter.add_signal(second);

        assert!(voter.remove_signal(second_id));
        assert_eq!(voter.signals().len(), 1);
        assert!(!voter.remove_signal(second_id));
        assert_eq!(voter.signals().len(), 1);
    }

    #[test]
    fn decision_probability_uses_the_bound_strategy() {
        let issuer = IdIssuer::new();
        let mut voter = Voter::new(&issuer, "Rep").with_strategy(Aggregation::Average);
        voter.add_signal(Signal::public_opinion(&issuer, 0.0).unwrap());
        voter.add_signal(Signal::public_opinion(&issuer, 1.0).unwrap());

        let p = voter
            .decision_probability(&Position::new(vec![0.5]), &VoteContext::new())
            .unwrap();
        // Outputs 0.25 and 0.75 under a neutral base.
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn default_name_is_derived_from_id() {
        let issuer = IdIssuer::new();
        let voter = Voter::new(&issuer, "");
        assert_eq!(voter.name(), format!("Voter_{}", voter.id()));
    }
}
