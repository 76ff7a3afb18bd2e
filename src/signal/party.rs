//! Party discipline.
//!
//! Discipline strength and party-line support are averaged over the
//! attached whips, falling back to the signal's own base values when no
//! whips are attached. A speaker agenda value in the context re-blends
//! the party line 70/30 toward the agenda. The output is a convex blend
//! of the running probability and the party line, weighted by the
//! aggregated discipline strength.

use crate::context::VoteContext;
use crate::error::{ensure_unit, ValidationError};
use crate::ident::ActorId;
use crate::roles::Whip;
use crate::signal::clamp_unit;

/// Party-discipline influence signal.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyDisciplineSignal {
    discipline_base_strength: f64,
    party_line_support: f64,
    whips: Vec<Whip>,
}

impl PartyDisciplineSignal {
    /// Creates a party-discipline signal with no attached whips.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if either scalar is
    /// outside `[0, 1]`.
    pub fn new(
        discipline_base_strength: f64,
        party_line_support: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            discipline_base_strength: ensure_unit(
                "discipline_base_strength",
                discipline_base_strength,
            )?,
            party_line_support: ensure_unit("party_line_support", party_line_support)?,
            whips: Vec::new(),
        })
    }

    /// Base discipline strength used when no whips are attached.
    #[must_use]
    pub const fn discipline_base_strength(&self) -> f64 {
        self.discipline_base_strength
    }

    /// Base party-line support used when no whips are attached.
    #[must_use]
    pub const fn party_line_support(&self) -> f64 {
        self.party_line_support
    }

    /// The attached whips.
    #[must_use]
    pub fn whips(&self) -> &[Whip] {
        &self.whips
    }

    /// Updates the base discipline strength.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` outside `[0, 1]`.
    pub fn set_discipline_base_strength(&mut self, strength: f64) -> Result<(), ValidationError> {
        self.discipline_base_strength = ensure_unit("discipline_base_strength", strength)?;
        Ok(())
    }

    /// Updates the base party-line support.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` outside `[0, 1]`.
    pub fn set_party_line_support(&mut self, support: f64) -> Result<(), ValidationError> {
        self.party_line_support = ensure_unit("party_line_support", support)?;
        Ok(())
    }

    /// Attaches a whip.
    pub fn add_whip(&mut self, whip: Whip) {
        self.whips.push(whip);
    }

    /// Detaches a whip by id. Returns true if one was removed; a no-op
    /// when absent.
    pub fn remove_whip(&mut self, id: ActorId) -> bool {
        if let Some(index) = self.whips.iter().position(|w| w.id() == id) {
            self.whips.remove(index);
            true
        } else {
            false
        }
    }

    fn aggregated_discipline(&self) -> f64 {
        if self.whips.is_empty() {
            return self.discipline_base_strength;
        }
        let total: f64 = self.whips.iter().map(Whip::discipline_strength).sum();
        #[allow(clippy::cast_precision_loss)]
        let avg = total / self.whips.len() as f64;
        clamp_unit(avg)
    }

    fn aggregated_party_line(&self) -> f64 {
        if self.whips.is_empty() {
            return self.party_line_support;
        }
        let total: f64 = self.whips.iter().map(Whip::party_line_support).sum();
        #[allow(clippy::cast_precision_loss)]
        let avg = total / self.whips.len() as f64;
        clamp_unit(avg)
    }

    pub(crate) fn compute(&self, ctx: &VoteContext) -> f64 {
        let strength = self.aggregated_discipline();
        let mut party_line = self.aggregated_party_line();
        if let Some(agenda) = ctx.speaker_agenda_support {
            party_line = 0.7 * party_line + 0.3 * clamp_unit(agenda);
        }
        let blended = (1.0 - strength) * ctx.base_or_neutral() + strength * party_line;
        clamp_unit(blended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::IdIssuer;

    #[test]
    fn base_values_apply_without_whips() {
        let signal = PartyDisciplineSignal::new(1.0, 0.9).unwrap();
        let ctx = VoteContext::new().with_base_prob(0.1);
        // Full discipline pins the vote to the party line.
        assert!((signal.compute(&ctx) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn zero_discipline_leaves_base_unchanged() {
        let signal = PartyDisciplineSignal::new(0.0, 0.9).unwrap();
        let ctx = VoteContext::new().with_base_prob(0.3);
        assert_eq!(signal.compute(&ctx), 0.3);
    }

    #[test]
    fn whip_values_override_base_values() {
        let issuer = IdIssuer::new();
        let mut signal = PartyDisciplineSignal::new(0.0, 0.0).unwrap();
        signal.add_whip(Whip::new(&issuer, "", 1.0, 0.8).unwrap());
        signal.add_whip(Whip::new(&issuer, "", 1.0, 0.4).unwrap());
        let ctx = VoteContext::new().with_base_prob(0.5);
        // Discipline avg 1.0, line avg 0.6.
        assert!((signal.compute(&ctx) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn speaker_agenda_reblends_the_party_line() {
        let signal = PartyDisciplineSignal::new(1.0, 0.5).unwrap();
        let ctx = VoteContext::new()
            .with_base_prob(0.5)
            .with_speaker_agenda_support(1.0);
        // Line becomes 0.7 * 0.5 + 0.3 * 1.0 = 0.65.
        assert!((signal.compute(&ctx) - 0.65).abs() < 1e-12);
    }

    #[test]
    fn remove_whip_is_noop_when_absent() {
        let issuer = IdIssuer::new();
        let mut signal = PartyDisciplineSignal::new(0.5, 0.5).unwrap();
        let whip = Whip::new(&issuer, "", 0.5, 0.5).unwrap();
        let id = whip.id();
        signal.add_whip(whip);
        assert!(signal.remove_whip(id));
        assert!(!signal.remove_whip(id));
        assert!(signal.whips().is_empty());
    }
}
