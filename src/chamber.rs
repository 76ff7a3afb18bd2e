//! The legislative chamber.
//!
//! A chamber holds the ordered collection of voters (insertion order is
//! the stable vote order) plus the auxiliary roles whose attributes feed
//! the shared ballot context. It orchestrates one ballot round at a
//! time: resolve the voting position, validate dimensions, collect every
//! ballot, then record the outcome on the bill.

use std::fmt;

use tracing::warn;

use crate::bill::Bill;
use crate::context::VoteContext;
use crate::error::SimulationError;
use crate::ident::{ActorId, ChamberId, IdIssuer};
use crate::rng::VoteRng;
use crate::roles::{Lobbyist, President, Speaker, Whip};
use crate::signal::Signal;
use crate::space::Position;
use crate::voter::Voter;

/// A body of voters plus auxiliary roles, processing one ballot at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Chamber {
    id: ChamberId,
    voters: Vec<Voter>,
    lobbyists: Vec<Lobbyist>,
    whips: Vec<Whip>,
    speaker: Option<Speaker>,
    president: Option<President>,
}

impl Chamber {
    /// Creates an empty chamber.
    #[must_use]
    pub fn new(issuer: &IdIssuer) -> Self {
        Self {
            id: issuer.next_chamber_id(),
            voters: Vec::new(),
            lobbyists: Vec::new(),
            whips: Vec::new(),
            speaker: None,
            president: None,
        }
    }

    /// The chamber's id.
    #[must_use]
    pub const fn id(&self) -> ChamberId {
        self.id
    }

    /// The voters in insertion (vote) order.
    #[must_use]
    pub fn voters(&self) -> &[Voter] {
        &self.voters
    }

    /// Number of seats currently filled.
    #[must_use]
    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    /// Seats a voter at the end of the vote order.
    pub fn add_voter(&mut self, voter: Voter) {
        self.voters.push(voter);
    }

    /// Removes and returns the last-seated voter.
    pub fn pop_voter(&mut self) -> Option<Voter> {
        self.voters.pop()
    }

    /// Removes a voter by id. Returns true if one was removed.
    pub fn remove_voter(&mut self, id: ActorId) -> bool {
        if let Some(index) = self.voters.iter().position(|v| v.id() == id) {
            self.voters.remove(index);
            true
        } else {
            false
        }
    }

    /// Gives every seated voter a signal produced by `make_signal`.
    ///
    /// Returns false (without calling the factory) when the chamber is
    /// empty.
    pub fn add_signal_to_all(&mut self, mut make_signal: impl FnMut() -> Signal) -> bool {
        if self.voters.is_empty() {
            return false;
        }
        for voter in &mut self.voters {
            voter.add_signal(make_signal());
        }
        true
    }

    /// The attached lobbyists.
    #[must_use]
    pub fn lobbyists(&self) -> &[Lobbyist] {
        &self.lobbyists
    }

    /// Attaches a lobbyist to the chamber.
    pub fn add_lobbyist(&mut self, lobbyist: Lobbyist) {
        self.lobbyists.push(lobbyist);
    }

    /// Detaches a lobbyist by id. Returns true if one was removed.
    pub fn remove_lobbyist(&mut self, id: ActorId) -> bool {
        if let Some(index) = self.lobbyists.iter().position(|l| l.id() == id) {
            self.lobbyists.remove(index);
            true
        } else {
            false
        }
    }

    /// The attached whips.
    #[must_use]
    pub fn whips(&self) -> &[Whip] {
        &self.whips
    }

    /// Attaches a whip to the chamber.
    pub fn attach_whip(&mut self, whip: Whip) {
        self.whips.push(whip);
    }

    /// Detaches a whip by id. Returns true if one was removed.
    pub fn detach_whip(&mut self, id: ActorId) -> bool {
        if let Some(index) = self.whips.iter().position(|w| w.id() == id) {
            self.whips.remove(index);
            true
        } else {
            false
        }
    }

    /// The current speaker.
    #[must_use]
    pub const fn speaker(&self) -> Option<&Speaker> {
        self.speaker.as_ref()
    }

    /// Installs a speaker.
    pub fn set_speaker(&mut self, speaker: Speaker) {
        self.speaker = Some(speaker);
    }

    /// The current president.
    #[must_use]
    pub const fn president(&self) -> Option<&President> {
        self.president.as_ref()
    }

    /// Installs a president.
    pub fn set_president(&mut self, president: President) {
        self.president = Some(president);
    }

    /// Compiles every voter's every signal.
    ///
    /// Expected to run once before the first trial; compiling again is
    /// harmless. Voters holding zero signals draw a non-fatal warning:
    /// they will vote using their static fallback probability.
    pub fn compile(&mut self) {
        for voter in &mut self.voters {
            if !voter.has_signals() {
                warn!(
                    voter = %voter.name(),
                    "voter has no signals; static fallback probability will be used"
                );
            }
            voter.compile();
        }
    }

    /// Casts one full round of ballots on `bill`.
    ///
    /// The voting position is `position` when given, otherwise the
    /// bill's own position. Speaker agenda support and presidential
    /// approval are injected into the context from the attached roles
    /// when the caller left them unset. After the round, the outcome
    /// (strict majority) is recorded on the bill.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::VoterDimensionMismatch` if any voter's
    /// fitted ideal point disagrees in length with the resolved
    /// position; the bill's tally is left untouched. Signal evaluation
    /// errors likewise fail the whole round.
    pub fn cast_votes(
        &self,
        bill: &mut Bill,
        position: Option<&Position>,
        ctx: &VoteContext,
        rng: &mut VoteRng,
    ) -> Result<u32, SimulationError> {
        let resolved = position.unwrap_or_else(|| bill.position()).clone();
        self.validate_dimensions(&resolved)?;
        let ctx = self.inject_roles(*ctx);

        let mut votes_for: u32 = 0;
        for voter in &self.voters {
            if voter.cast_vote(&resolved, &ctx, rng)? {
                votes_for += 1;
            }
        }

        if (votes_for as usize) * 2 > self.voters.len() {
            bill.record_pass();
        } else {
            bill.record_fail();
        }
        Ok(votes_for)
    }

    // Every voter's fitted ideal point must agree with the ballot position.
    fn validate_dimensions(&self, position: &Position) -> Result<(), SimulationError> {
        if position.is_empty() {
            return Ok(());
        }
        for voter in &self.voters {
            for signal in voter.signals() {
                if let Some(dim) = signal.positional_dim() {
                    if dim != position.dim() {
                        return Err(SimulationError::VoterDimensionMismatch {
                            voter: voter.name().to_string(),
                            expected: position.dim(),
                            actual: dim,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn inject_roles(&self, mut ctx: VoteContext) -> VoteContext {
        if ctx.speaker_agenda_support.is_none() {
            ctx.speaker_agenda_support = self.speaker.as_ref().map(Speaker::agenda_support);
        }
        if ctx.president_approval.is_none() {
            ctx.president_approval = self.president.as_ref().map(President::approval_rating);
        }
        ctx
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chamber {}", self.id)?;
        writeln!(f, "Seats: {}", self.voters.len())?;
        write!(f, "Voters: ")?;
        for (i, voter) in self.voters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", voter.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalKind;

    fn spatial_voter(issuer: &IdIssuer, name: &str, ideal: Vec<f64>) -> Voter {
        let dim = ideal.len();
        let mut voter = Voter::new(issuer, name);
        voter.add_signal(
            Signal::ideal_point(
                issuer,
                Position::new(ideal),
                Position::uniform(dim, 0.5),
            )
            .unwrap(),
        );
        voter
    }

    #[test]
    fn votes_are_counted_and_tally_recorded() {
        let issuer = IdIssuer::new();
        let mut chamber = Chamber::new(&issuer);
        for i in 0..3 {
            chamber.add_voter(
                Voter::new(&issuer, format!("Rep-{i}"))
                    .with_yes_chance(1.0)
                    .unwrap(),
            );
        }
        let mut bill = Bill::new(&issuer, Position::new(vec![0.5, 0.5]));
        let mut rng = VoteRng::seeded(1);

        let votes = chamber
            .cast_votes(&mut bill, None, &VoteContext::new(), &mut rng)
            .unwrap();
        assert_eq!(votes, 3);
        assert_eq!(bill.n_passed(), 1);
        assert_eq!(bill.n_failed(), 0);
    }

    #[test]
    fn minority_support_records_a_failure() {
        let issuer = IdIssuer::new();
        let mut chamber = Chamber::new(&issuer);
        for i in 0..4 {
            let chance = if i == 0 { 1.0 } else { 0.0 };
            chamber.add_voter(
                Voter::new(&issuer, format!("Rep-{i}"))
                    .with_yes_chance(chance)
                    .unwrap(),
            );
        }
        let mut bill = Bill::new(&issuer, Position::new(vec![0.5]));
        let mut rng = VoteRng::seeded(1);

        let votes = chamber
            .cast_votes(&mut bill, None, &VoteContext::new(), &mut rng)
            .unwrap();
        assert_eq!(votes, 1);
        assert_eq!(bill.n_failed(), 1);
    }

    #[test]
    fn dimension_mismatch_fails_without_touching_the_tally() {
        let issuer = IdIssuer::new();
        let mut chamber = Chamber::new(&issuer);
        chamber.add_voter(spatial_voter(&issuer, "Flatlander", vec![0.5, 0.5]));
        chamber.add_voter(spatial_voter(&issuer, "Spaceman", vec![0.5, 0.5, 0.5]));

        let mut bill = Bill::new(&issuer, Position::new(vec![0.4, 0.6]));
        let mut rng = VoteRng::seeded(1);

        let err = chamber
            .cast_votes(&mut bill, None, &VoteContext::new(), &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::VoterDimensionMismatch { actual: 3, expected: 2, .. }
        ));
        assert_eq!(bill.n_passed(), 0);
        assert_eq!(bill.n_failed(), 0);
    }

    #[test]
    fn explicit_position_overrides_the_bill_position() {
        let issuer = IdIssuer::new();
        let mut chamber = Chamber::new(&issuer);
        chamber.add_voter(spatial_voter(&issuer, "Rep", vec![0.5, 0.5]));

        // Bill position has the wrong dimensionality, but the explicit
        // override matches the voter.
        let mut bill = Bill::new(&issuer, Position::new(vec![0.4, 0.6, 0.1]));
        let mut rng = VoteRng::seeded(1);
        let override_position = Position::new(vec![0.5, 0.5]);

        assert!(chamber
            .cast_votes(
                &mut bill,
                Some(&override_position),
                &VoteContext::new(),
                &mut rng
            )
            .is_ok());
    }

    #[test]
    fn installed_roles_feed_the_ballot_context() {
        let issuer = IdIssuer::new();

        // A voter whose only signal is media pressure: its output moves
        // with the president's approval rating.
        let mut voter = Voter::new(&issuer, "Rep");
        voter.add_signal(Signal::media_pressure(&issuer, 0.0).unwrap());

        let mut with_president = Chamber::new(&issuer);
        with_president.add_voter(voter.clone());
        with_president.set_president(President::new(&issuer, "", 1.0).unwrap());

        let without_president = {
            let mut chamber = Chamber::new(&issuer);
            chamber.add_voter(voter);
            chamber
        };

        let position = Position::new(vec![0.5]);
        let ctx = VoteContext::new();
        let p_with = with_president.voters()[0]
            .decision_probability(&position, &with_president.inject_roles(ctx))
            .unwrap();
        let p_without = without_president.voters()[0]
            .decision_probability(&position, &without_president.inject_roles(ctx))
            .unwrap();
        assert!(p_with > p_without);
    }

    #[test]
    fn compile_tolerates_signalless_voters() {
        let issuer = IdIssuer::new();
        let mut chamber = Chamber::new(&issuer);
        chamber.add_voter(Voter::new(&issuer, "Empty"));
        // Advisory only: must not panic or error.
        chamber.compile();
        chamber.compile();
    }

    #[test]
    fn add_signal_to_all_reaches_every_seat() {
        let issuer = IdIssuer::new();
        let mut chamber = Chamber::new(&issuer);
        assert!(!chamber.add_signal_to_all(|| Signal::public_opinion(&issuer, 0.5).unwrap()));

        chamber.add_voter(Voter::new(&issuer, "A"));
        chamber.add_voter(Voter::new(&issuer, "B"));
        assert!(chamber.add_signal_to_all(|| Signal::public_opinion(&issuer, 0.5).unwrap()));
        assert!(chamber.voters().iter().all(Voter::has_signals));

        // Each seat got its own signal identity.
        let ids: Vec<_> = chamber
            .voters()
            .iter()
            .map(|v| v.signals()[0].id())
            .collect();
        assert_ne!(ids[0], ids[1]);

        let kind_ok = chamber
            .voters()
            .iter()
            .all(|v| matches!(v.signals()[0].kind(), SignalKind::PublicOpinion(_)));
        assert!(kind_ok);
    }

    #[test]
    fn detach_whip_is_noop_when_absent() {
        let issuer = IdIssuer::new();
        let mut chamber = Chamber::new(&issuer);
        let whip = Whip::new(&issuer, "", 0.5, 0.5).unwrap();
        let id = whip.id();
        chamber.attach_whip(whip);
        assert!(chamber.detach_whip(id));
        assert!(!chamber.detach_whip(id));
    }
}
