//! Lobbying pressure.
//!
//! A lobbying signal carries a configured base intensity plus an
//! optional roster of external lobbying participants. Each participant
//! contributes `strength * stance`; the contributions are averaged,
//! combined with the base intensity, and the resulting signed pressure
//! is applied asymmetrically to the running probability.

use crate::context::VoteContext;
use crate::error::{ensure_unit, ValidationError};
use crate::ident::ActorId;
use crate::roles::Lobbyist;
use crate::signal::{apply_pressure, clamp_signed_unit, clamp_unit};

/// Lobbying influence signal.
#[derive(Debug, Clone, PartialEq)]
pub struct LobbyingSignal {
    intensity: f64,
    lobbyists: Vec<Lobbyist>,
}

impl LobbyingSignal {
    /// Creates a lobbying signal with no attached participants.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if `intensity` is
    /// outside `[0, 1]`.
    pub fn new(intensity: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            intensity: ensure_unit("intensity", intensity)?,
            lobbyists: Vec::new(),
        })
    }

    /// Base lobbying intensity in `[0, 1]`.
    #[must_use]
    pub const fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Updates the base intensity.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` outside `[0, 1]`.
    pub fn set_intensity(&mut self, intensity: f64) -> Result<(), ValidationError> {
        self.intensity = ensure_unit("intensity", intensity)?;
        Ok(())
    }

    /// The attached participants.
    #[must_use]
    pub fn lobbyists(&self) -> &[Lobbyist] {
        &self.lobbyists
    }

    /// Attaches an external participant.
    pub fn add_lobbyist(&mut self, lobbyist: Lobbyist) {
        self.lobbyists.push(lobbyist);
    }

    /// Detaches a participant by id. Returns true if one was removed;
    /// a no-op when absent.
    pub fn remove_lobbyist(&mut self, id: ActorId) -> bool {
        if let Some(index) = self.lobbyists.iter().position(|l| l.id() == id) {
            self.lobbyists.remove(index);
            true
        } else {
            false
        }
    }

    // Average of strength * stance over participants, in [-1, 1].
    fn participant_pressure(&self) -> f64 {
        if self.lobbyists.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .lobbyists
            .iter()
            .map(|l| l.influence_strength() * l.stance())
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let avg = total / self.lobbyists.len() as f64;
        clamp_signed_unit(avg)
    }

    pub(crate) fn compute(&self, ctx: &VoteContext) -> f64 {
        let combined = clamp_signed_unit(self.intensity + self.participant_pressure());
        clamp_unit(apply_pressure(ctx.base_or_neutral(), combined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::IdIssuer;

    #[test]
    fn idle_signal_leaves_base_unchanged() {
        let signal = LobbyingSignal::new(0.0).unwrap();
        let ctx = VoteContext::new().with_base_prob(0.37);
        assert_eq!(signal.compute(&ctx), 0.37);
    }

    #[test]
    fn positive_intensity_scales_the_gap_to_one() {
        let signal = LobbyingSignal::new(0.5).unwrap();
        let ctx = VoteContext::new().with_base_prob(0.4);
        // 0.4 + 0.6 * 0.5
        assert!((signal.compute(&ctx) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn opposed_participants_can_push_below_base() {
        let issuer = IdIssuer::new();
        let mut signal = LobbyingSignal::new(0.0).unwrap();
        signal.add_lobbyist(Lobbyist::new(&issuer, "", 1.0, -1.0).unwrap());
        let ctx = VoteContext::new().with_base_prob(0.6);
        // Pressure -1.0 wipes the probability out.
        assert_eq!(signal.compute(&ctx), 0.0);
    }

    #[test]
    fn participant_contributions_are_averaged() {
        let issuer = IdIssuer::new();
        let mut signal = LobbyingSignal::new(0.0).unwrap();
        signal.add_lobbyist(Lobbyist::new(&issuer, "", 0.8, 1.0).unwrap());
        signal.add_lobbyist(Lobbyist::new(&issuer, "", 0.4, -1.0).unwrap());
        let ctx = VoteContext::new().with_base_prob(0.5);
        // Average pressure (0.8 - 0.4) / 2 = 0.2 -> 0.5 + 0.5 * 0.2
        assert!((signal.compute(&ctx) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn combined_pressure_saturates_at_one() {
        let issuer = IdIssuer::new();
        let mut signal = LobbyingSignal::new(0.9).unwrap();
        signal.add_lobbyist(Lobbyist::new(&issuer, "", 1.0, 1.0).unwrap());
        let ctx = VoteContext::new().with_base_prob(0.1);
        // 0.9 + 1.0 clamps to 1.0 before application.
        assert_eq!(signal.compute(&ctx), 1.0);
    }

    #[test]
    fn remove_lobbyist_removes_exactly_one_match() {
        let issuer = IdIssuer::new();
        let mut signal = LobbyingSignal::new(0.0).unwrap();
        let keep = Lobbyist::new(&issuer, "keep", 0.5, 1.0).unwrap();
        let drop = Lobbyist::new(&issuer, "drop", 0.5, 1.0).unwrap();
        let drop_id = drop.id();
        signal.add_lobbyist(keep);
        signal.add_lobbyist(drop);

        assert!(signal.remove_lobbyist(drop_id));
        assert_eq!(signal.lobbyists().len(), 1);
        assert!(!signal.remove_lobbyist(drop_id));
    }
}
