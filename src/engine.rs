//! Monte Carlo simulation engine.
//!
//! The engine repeats vote-casting on a fixed bill under a fixed seed
//! and collects the distribution of yes-counts. Trials are strictly
//! sequential: every ballot draws from the engine's single deterministic
//! random source, and that source is re-seeded exactly once per run.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::bill::Bill;
use crate::chamber::Chamber;
use crate::context::VoteContext;
use crate::error::SimulationError;
use crate::rng::VoteRng;

/// Immutable parameters of one simulation session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Number of trials to run.
    pub trials: usize,

    /// Seed establishing the reproducibility contract.
    pub seed: u64,

    /// Human-readable description of the scenario.
    pub description: String,

    /// The bill under vote, reused across all trials.
    pub bill: Bill,

    /// The chamber casting the votes.
    pub chamber: Chamber,
}

/// Derived summary statistics over the accumulated results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteSummary {
    /// Trials accumulated so far.
    pub trials_run: usize,

    /// Mean yes-count per trial.
    pub mean_votes_for: f64,

    /// Mean no-count per trial.
    pub mean_votes_against: f64,

    /// Fraction of trials in which the bill passed (strict majority).
    pub pass_rate: f64,
}

/// Sequential Monte Carlo sweep over a fixed bill and chamber.
#[derive(Debug, Clone)]
pub struct MonteCarlo {
    trials: usize,
    seed: u64,
    description: String,
    bill: Bill,
    chamber: Chamber,
    rng: VoteRng,
    results: Vec<u32>,
}

impl MonteCarlo {
    /// Creates an engine from session parameters.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            trials: session.trials,
            seed: session.seed,
            description: session.description,
            bill: session.bill,
            chamber: session.chamber,
            rng: VoteRng::seeded(session.seed),
            results: Vec::new(),
        }
    }

    /// Runs the configured number of trials.
    ///
    /// The engine's random source is re-seeded from the session seed at
    /// the start of the run, so two engines built from identical
    /// sessions produce identical result sequences. Results accumulate:
    /// calling `run` again extends the history rather than replacing it.
    ///
    /// # Errors
    ///
    /// Propagates the first vote-casting failure; results from already
    /// completed trials are kept.
    pub fn run(&mut self) -> Result<&[u32], SimulationError> {
        self.rng.reseed(Some(self.seed));
        debug!(
            trials = self.trials,
            seed = self.seed,
            "starting Monte Carlo sweep"
        );
        for _ in 0..self.trials {
            let votes_for = self.chamber.cast_votes(
                &mut self.bill,
                None,
                &VoteContext::new(),
                &mut self.rng,
            )?;
            self.results.push(votes_for);
        }
        Ok(&self.results)
    }

    /// The accumulated per-trial yes-counts.
    #[must_use]
    pub fn results(&self) -> &[u32] {
        &self.results
    }

    /// Trials per run.
    #[must_use]
    pub const fn trials(&self) -> usize {
        self.trials
    }

    /// The session seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The scenario description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The bill under vote.
    #[must_use]
    pub const fn bill(&self) -> &Bill {
        &self.bill
    }

    /// The chamber casting the votes.
    #[must_use]
    pub const fn chamber(&self) -> &Chamber {
        &self.chamber
    }

    /// Summary statistics over the accumulated results, or `None` when
    /// no trials have run yet.
    #[must_use]
    pub fn summary(&self) -> Option<VoteSummary> {
        if self.results.is_empty() {
            return None;
        }
        let seats = self.chamber.voter_count();
        #[allow(clippy::cast_precision_loss)]
        let trials = self.results.len() as f64;
        #[allow(clippy::cast_precision_loss)]
        let mean_votes_for =
            self.results.iter().map(|&v| f64::from(v)).sum::<f64>() / trials;
        let passed = self
            .results
            .iter()
            .filter(|&&votes| (votes as usize) * 2 > seats)
            .count();
        #[allow(clippy::cast_precision_loss)]
        let pass_rate = passed as f64 / trials;
        #[allow(clippy::cast_precision_loss)]
        let mean_votes_against = seats as f64 - mean_votes_for;
        Some(VoteSummary {
            trials_run: self.results.len(),
            mean_votes_for,
            mean_votes_against,
            pass_rate,
        })
    }
}

impl fmt::Display for MonteCarlo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.summary() {
            None => write!(f, "No simulations run yet"),
            Some(summary) => {
                writeln!(f, "Simulations: {}", summary.trials_run)?;
                writeln!(f, "Average votes for: {:.2}", summary.mean_votes_for)?;
                write!(f, "Average votes against: {:.2}", summary.mean_votes_against)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::IdIssuer;
    use crate::signal::Signal;
    use crate::space::Position;
    use crate::voter::Voter;

    fn small_session(issuer: &IdIssuer, seed: u64) -> Session {
        let mut chamber = Chamber::new(issuer);
        for i in 0..5 {
            let mut voter = Voter::new(issuer, format!("Rep-{i}"));
            voter.add_signal(Signal::public_opinion(issuer, 0.6).unwrap());
            chamber.add_voter(voter);
        }
        chamber.compile();
        Session {
            trials: 40,
            seed,
            description: "unit-test session".to_string(),
            bill: Bill::new(issuer, Position::new(vec![0.5, 0.5])),
            chamber,
        }
    }

    #[test]
    fn identical_sessions_reproduce_identical_results() {
        let issuer = IdIssuer::new();
        let mut a = MonteCarlo::new(small_session(&issuer, 99));
        let mut b = MonteCarlo::new(small_session(&issuer, 99));
        assert_eq!(a.run().unwrap(), b.run().unwrap());
    }

    #[test]
    fn rerun_extends_rather_than_replaces() {
        let issuer = IdIssuer::new();
        let mut engine = MonteCarlo::new(small_session(&issuer, 7));
        engine.run().unwrap();
        assert_eq!(engine.results().len(), 40);
        engine.run().unwrap();
        assert_eq!(engine.results().len(), 80);
        // Re-seeding at the start of each run replays the same stream.
        assert_eq!(engine.results()[..40], engine.results()[40..]);
    }

    #[test]
    fn summary_is_consistent_with_results() {
        let issuer = IdIssuer::new();
        let mut engine = MonteCarlo::new(small_session(&issuer, 11));
        assert!(engine.summary().is_none());
        engine.run().unwrap();

        let summary = engine.summary().unwrap();
        assert_eq!(summary.trials_run, 40);
        assert!(summary.mean_votes_for >= 0.0 && summary.mean_votes_for <= 5.0);
        assert!(
            (summary.mean_votes_for + summary.mean_votes_against - 5.0).abs() < 1e-9
        );
        assert!((0.0..=1.0).contains(&summary.pass_rate));
    }

    #[test]
    fn trial_outcomes_are_recorded_on_the_bill() {
        let issuer = IdIssuer::new();
        let mut engine = MonteCarlo::new(small_session(&issuer, 13));
        engine.run().unwrap();
        assert_eq!(engine.bill().n_passed() + engine.bill().n_failed(), 40);
    }

    #[test]
    fn display_reports_progress() {
        let issuer = IdIssuer::new();
        let mut engine = MonteCarlo::new(small_session(&issuer, 17));
        assert_eq!(format!("{engine}"), "No simulations run yet");
        engine.run().unwrap();
        assert!(format!("{engine}").contains("Simulations: 40"));
    }
}
