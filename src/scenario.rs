//! Declarative scenario assembly.
//!
//! A [`ScenarioConfig`] describes a complete simulation — chamber size,
//! policy dimensionality, per-signal parameters, auxiliary role fleets,
//! aggregation rule, trial count, and seed — and the builders wire it
//! into a ready-to-run [`MonteCarlo`] engine. Every field has a default,
//! so a scenario can be written as a sparse JSON document.

use serde::{Deserialize, Serialize};

use crate::aggregation::Aggregation;
use crate::bill::Bill;
use crate::chamber::Chamber;
use crate::engine::{MonteCarlo, Session};
use crate::error::{FloorsimResult, ValidationError};
use crate::ident::IdIssuer;
use crate::rng::VoteRng;
use crate::roles::{Lobbyist, President, Speaker, Whip};
use crate::signal::{LobbyingSignal, PartyDisciplineSignal, Signal, SignalKind};
use crate::space::Position;
use crate::voter::Voter;

/// Aggregation rule selector for scenario configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationChoice {
    /// Sequential left-fold chaining.
    #[default]
    Sequential,

    /// Arithmetic mean.
    Average,

    /// Weighted mean; requires `aggregation_weights`.
    Weighted,

    /// Product with veto semantics.
    Multiplicative,
}

/// Which signals each voter receives, and their shared parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Give each voter an ideal-point encoder with a random ideal point.
    pub include_ideal_point: bool,

    /// Give each voter a public-opinion signal.
    pub include_public_opinion: bool,

    /// Give each voter a lobbying signal.
    pub include_lobbying: bool,

    /// Give each voter a media-pressure signal.
    pub include_media_pressure: bool,

    /// Give each voter a party-discipline signal.
    pub include_party_discipline: bool,

    /// Public support level in `[0, 1]`.
    pub public_support: f64,

    /// Base lobbying intensity in `[0, 1]`.
    pub lobbying_intensity: f64,

    /// Base media pressure in `[-1, 1]`.
    pub media_pressure: f64,

    /// Party-line support in `[0, 1]`.
    pub party_line_support: f64,

    /// Base party-discipline strength in `[0, 1]`.
    pub party_discipline_strength: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            include_ideal_point: true,
            include_public_opinion: true,
            include_lobbying: true,
            include_media_pressure: true,
            include_party_discipline: true,
            public_support: 0.5,
            lobbying_intensity: 0.0,
            media_pressure: 0.0,
            party_line_support: 0.5,
            party_discipline_strength: 0.5,
        }
    }
}

/// Auxiliary role fleet configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolesConfig {
    /// Number of lobbyists attached to every lobbying signal.
    pub n_lobbyists: usize,

    /// Influence strength shared by all configured lobbyists.
    pub lobbyist_strength: f64,

    /// Stance shared by all configured lobbyists, in `[-1, 1]`.
    pub lobbyist_stance: f64,

    /// Number of whips attached to every party-discipline signal.
    pub n_whips: usize,

    /// Discipline strength shared by all configured whips.
    pub whip_discipline_strength: f64,

    /// Party-line support shared by all configured whips.
    pub whip_party_line_support: f64,

    /// The speaker's agenda support.
    pub speaker_agenda_support: f64,

    /// The president's approval rating.
    pub president_approval_rating: f64,
}

impl Default for RolesConfig {
    fn default() -> Self {
        Self {
            n_lobbyists: 0,
            lobbyist_strength: 0.5,
            lobbyist_stance: 1.0,
            n_whips: 0,
            whip_discipline_strength: 0.5,
            whip_party_line_support: 0.5,
            speaker_agenda_support: 0.5,
            president_approval_rating: 0.5,
        }
    }
}

/// Full declarative description of one simulation scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of voters seated in the chamber.
    pub num_voters: usize,

    /// Policy-space dimensionality.
    pub policy_dim: usize,

    /// Monte Carlo trial count.
    pub trials: usize,

    /// Session seed.
    pub seed: u64,

    /// Human-readable scenario description.
    pub description: String,

    /// Aggregation rule for every voter.
    pub aggregation: AggregationChoice,

    /// Weight vector for [`AggregationChoice::Weighted`].
    pub aggregation_weights: Option<Vec<f64>>,

    /// Signal toggles and parameters.
    pub signals: SignalConfig,

    /// Auxiliary role fleet.
    pub roles: RolesConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            num_voters: 100,
            policy_dim: 4,
            trials: 300,
            seed: 42,
            description: "floorsim scenario".to_string(),
            aggregation: AggregationChoice::Sequential,
            aggregation_weights: None,
            signals: SignalConfig::default(),
            roles: RolesConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Parses a scenario from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Resolves the configured aggregation rule.
///
/// # Errors
///
/// Returns `ValidationError::MissingAggregationWeights` when the
/// weighted rule is selected without a weight vector, or the weight-sum
/// error from [`Aggregation::weighted`].
pub fn build_aggregation(config: &ScenarioConfig) -> Result<Aggregation, ValidationError> {
    match config.aggregation {
        AggregationChoice::Sequential => Ok(Aggregation::Sequential),
        AggregationChoice::Average => Ok(Aggregation::Average),
        AggregationChoice::Multiplicative => Ok(Aggregation::Multiplicative),
        AggregationChoice::Weighted => {
            let weights = config
                .aggregation_weights
                .clone()
                .ok_or(ValidationError::MissingAggregationWeights)?;
            Aggregation::weighted(weights)
        }
    }
}

/// Builds the auxiliary role fleet.
///
/// # Errors
///
/// Returns a `ValidationError` when any configured scalar is out of range.
pub fn build_roles(
    config: &ScenarioConfig,
    issuer: &IdIssuer,
) -> Result<(Vec<Lobbyist>, Vec<Whip>, Speaker, President), ValidationError> {
    let roles = &config.roles;
    let lobbyists = (1..=roles.n_lobbyists)
        .map(|i| {
            Lobbyist::new(
                issuer,
                format!("Lobbyist_{i}"),
                roles.lobbyist_strength,
                roles.lobbyist_stance,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    let whips = (1..=roles.n_whips)
        .map(|i| {
            Whip::new(
                issuer,
                format!("Whip_{i}"),
                roles.whip_discipline_strength,
                roles.whip_party_line_support,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    let speaker = Speaker::new(issuer, "", roles.speaker_agenda_support)?;
    let president = President::new(issuer, "", roles.president_approval_rating)?;
    Ok((lobbyists, whips, speaker, president))
}

fn build_signals(
    config: &ScenarioConfig,
    issuer: &IdIssuer,
    lobbyists: &[Lobbyist],
    whips: &[Whip],
    rng: &mut VoteRng,
) -> Result<Vec<Signal>, ValidationError> {
    let cfg = &config.signals;
    let mut signals = Vec::new();

    if cfg.include_ideal_point {
        signals.push(Signal::ideal_point(
            issuer,
            Position::random(config.policy_dim, rng),
            Position::uniform(config.policy_dim, 0.5),
        )?);
    }
    if cfg.include_public_opinion {
        signals.push(Signal::public_opinion(issuer, cfg.public_support)?);
    }
    if cfg.include_lobbying {
        let mut lobbying = LobbyingSignal::new(cfg.lobbying_intensity)?;
        for lobbyist in lobbyists {
            lobbying.add_lobbyist(lobbyist.clone());
        }
        signals.push(Signal::new(issuer, SignalKind::Lobbying(lobbying)));
    }
    if cfg.include_media_pressure {
        signals.push(Signal::media_pressure(issuer, cfg.media_pressure)?);
    }
    if cfg.include_party_discipline {
        let mut party = PartyDisciplineSignal::new(
            cfg.party_discipline_strength,
            cfg.party_line_support,
        )?;
        for whip in whips {
            party.add_whip(whip.clone());
        }
        signals.push(Signal::new(issuer, SignalKind::PartyDiscipline(party)));
    }

    Ok(signals)
}

/// Builds and compiles a chamber per the scenario description.
///
/// # Errors
///
/// Returns any validation error raised while building roles, signals,
/// or the aggregation rule.
pub fn build_chamber(
    config: &ScenarioConfig,
    issuer: &IdIssuer,
    rng: &mut VoteRng,
) -> FloorsimResult<Chamber> {
    let (lobbyists, whips, speaker, president) = build_roles(config, issuer)?;
    let strategy = build_aggregation(config)?;

    let mut chamber = Chamber::new(issuer);
    for i in 1..=config.num_voters {
        let mut voter =
            Voter::new(issuer, format!("Rep-{i}")).with_strategy(strategy.clone());
        for signal in build_signals(config, issuer, &lobbyists, &whips, rng)? {
            voter.add_signal(signal);
        }
        chamber.add_voter(voter);
    }

    for lobbyist in lobbyists {
        chamber.add_lobbyist(lobbyist);
    }
    for whip in whips {
        chamber.attach_whip(whip);
    }
    chamber.set_speaker(speaker);
    chamber.set_president(president);

    chamber.compile();
    Ok(chamber)
}

/// Builds a bill with a random position of the configured dimensionality.
#[must_use]
pub fn build_bill(config: &ScenarioConfig, issuer: &IdIssuer, rng: &mut VoteRng) -> Bill {
    let mut bill = Bill::new(issuer, Position::empty());
    bill.randomize_position(config.policy_dim, rng);
    bill
}

/// Builds a complete engine from a scenario description.
///
/// Assembly draws (random ideal points, the bill position) come from a
/// source seeded with the session seed, so two engines built from the
/// same config are identical.
///
/// # Errors
///
/// Returns any validation error raised during assembly.
pub fn build_engine(config: &ScenarioConfig, issuer: &IdIssuer) -> FloorsimResult<MonteCarlo> {
    let mut rng = VoteRng::seeded(config.seed);
    let chamber = build_chamber(config, issuer, &mut rng)?;
    let bill = build_bill(config, issuer, &mut rng);
    Ok(MonteCarlo::new(Session {
        trials: config.trials,
        seed: config.seed,
        description: config.description.clone(),
        bill,
        chamber,
    }))
}
