//! # Floorsim - Legislative Vote Simulation
//!
//! Floorsim simulates collective decision-making: a chamber of
//! independent voters decides on a bill located in a multi-dimensional
//! policy space. Each voter's yes-probability is composed from
//! independent influence signals (ideological distance, public opinion,
//! lobbying, media pressure, party discipline) through a configurable
//! aggregation rule, then sampled against a deterministic random
//! source. Repeating this in a Monte Carlo sweep yields a distribution
//! over vote counts, usable to compare policy scenarios.
//!
//! ## Core Concepts
//!
//! - **Bill**: the proposal under vote, at a point in policy space
//! - **Signal**: one unit of influence on a voter's yes-probability
//! - **Aggregation**: the rule folding signal outputs into one probability
//! - **Chamber**: voters plus auxiliary roles processing one ballot round
//! - **Monte Carlo engine**: repeated trials under a fixed seed
//!
//! ## Usage
//!
//! ```rust
//! use floorsim::{build_engine, IdIssuer, ScenarioConfig};
//!
//! let issuer = IdIssuer::new();
//! let config = ScenarioConfig {
//!     num_voters: 20,
//!     trials: 50,
//!     seed: 42,
//!     ..ScenarioConfig::default()
//! };
//!
//! let mut engine = build_engine(&config, &issuer).unwrap();
//! let results = engine.run().unwrap();
//! assert_eq!(results.len(), 50);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregation;
pub mod bill;
pub mod chamber;
pub mod context;
pub mod engine;
pub mod error;
pub mod ident;
pub mod rng;
pub mod roles;
pub mod scenario;
pub mod signal;
pub mod space;
pub mod voter;

// Re-export primary types at crate root for convenience
pub use aggregation::{Aggregation, NEUTRAL_PROBABILITY};
pub use bill::Bill;
pub use chamber::Chamber;
pub use context::VoteContext;
pub use engine::{MonteCarlo, Session, VoteSummary};
pub use error::{FloorsimError, FloorsimResult, SimulationError, ValidationError};
pub use ident::{ActorId, BillId, ChamberId, IdIssuer, SignalId};
pub use rng::VoteRng;
pub use roles::{Lobbyist, President, Speaker, Whip};
pub use scenario::{
    build_aggregation, build_bill, build_chamber, build_engine, build_roles, AggregationChoice,
    RolesConfig, ScenarioConfig, SignalConfig,
};
pub use signal::{
    IdealPointSignal, LobbyingSignal, MediaPressureSignal, PartyDisciplineSignal,
    PublicOpinionSignal, Signal, SignalKind,
};
pub use space::Position;
pub use voter::Voter;
