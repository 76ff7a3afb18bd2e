//! Auxiliary legislative roles.
//!
//! Lobbyists, whips, the speaker, and the president do not cast ballots
//! themselves. Their attributes feed influence signals: lobbyists push a
//! signed stance with some strength, whips enforce party discipline, and
//! the speaker/president contribute agenda and approval values that the
//! chamber injects into the shared ballot context.
//!
//! All scalar attributes are range-validated at construction and at every
//! setter call; out-of-range values are rejected, never clamped.

use crate::error::{ensure_signed_unit, ensure_unit, ValidationError};
use crate::ident::{ActorId, IdIssuer};

/// An external lobbying participant.
///
/// Strength is in `[0, 1]`; stance is signed, `-1` for full opposition
/// and `+1` for full support.
#[derive(Debug, Clone, PartialEq)]
pub struct Lobbyist {
    id: ActorId,
    name: String,
    influence_strength: f64,
    stance: f64,
}

impl Lobbyist {
    /// Creates a lobbyist.
    ///
    /// An empty name defaults to `Lobbyist_{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if `influence_strength`
    /// is outside `[0, 1]` or `stance` is outside `[-1, 1]`.
    pub fn new(
        issuer: &IdIssuer,
        name: impl Into<String>,
        influence_strength: f64,
        stance: f64,
    ) -> Result<Self, ValidationError> {
        let id = issuer.next_actor_id();
        Ok(Self {
            id,
            name: default_name(name.into(), "Lobbyist", id),
            influence_strength: ensure_unit("influence_strength", influence_strength)?,
            stance: ensure_signed_unit("stance", stance)?,
        })
    }

    /// The lobbyist's id.
    #[must_use]
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// The lobbyist's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Influence strength in `[0, 1]`.
    #[must_use]
    pub const fn influence_strength(&self) -> f64 {
        self.influence_strength
    }

    /// Signed stance in `[-1, 1]`.
    #[must_use]
    pub const fn stance(&self) -> f64 {
        self.stance
    }

    /// Updates the influence strength.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` outside `[0, 1]`.
    pub fn set_influence_strength(&mut self, strength: f64) -> Result<(), ValidationError> {
        self.influence_strength = ensure_unit("influence_strength", strength)?;
        Ok(())
    }

    /// Updates the stance.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` outside `[-1, 1]`.
    pub fn set_stance(&mut self, stance: f64) -> Result<(), ValidationError> {
        self.stance = ensure_signed_unit("stance", stance)?;
        Ok(())
    }
}

/// A party whip enforcing discipline.
#[derive(Debug, Clone, PartialEq)]
pub struct Whip {
    id: ActorId,
    name: String,
    discipline_strength: f64,
    party_line_support: f64,
}

impl Whip {
    /// Creates a whip.
    ///
    /// An empty name defaults to `Whip_{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if either scalar is
    /// outside `[0, 1]`.
    pub fn new(
        issuer: &IdIssuer,
        name: impl Into<String>,
        discipline_strength: f64,
        party_line_support: f64,
    ) -> Result<Self, ValidationError> {
        let id = issuer.next_actor_id();
        Ok(Self {
            id,
            name: default_name(name.into(), "Whip", id),
            discipline_strength: ensure_unit("discipline_strength", discipline_strength)?,
            party_line_support: ensure_unit("party_line_support", party_line_support)?,
        })
    }

    /// The whip's id.
    #[must_use]
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// The whip's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Discipline strength in `[0, 1]`.
    #[must_use]
    pub const fn discipline_strength(&self) -> f64 {
        self.discipline_strength
    }

    /// Party-line support in `[0, 1]`.
    #[must_use]
    pub const fn party_line_support(&self) -> f64 {
        self.party_line_support
    }

    /// Updates the discipline strength.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` outside `[0, 1]`.
    pub fn set_discipline_strength(&mut self, strength: f64) -> Result<(), ValidationError> {
        self.discipline_strength = ensure_unit("discipline_strength", strength)?;
        Ok(())
    }

    /// Updates the party-line support.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` outside `[0, 1]`.
    pub fn set_party_line_support(&mut self, support: f64) -> Result<(), ValidationError> {
        self.party_line_support = ensure_unit("party_line_support", support)?;
        Ok(())
    }
}

/// The chamber speaker, with agenda-setting strength.
#[derive(Debug, Clone, PartialEq)]
pub struct Speaker {
    id: ActorId,
    name: String,
    agenda_support: f64,
}

impl Speaker {
    /// Creates a speaker.
    ///
    /// An empty name defaults to `Speaker_{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if `agenda_support`
    /// is outside `[0, 1]`.
    pub fn new(
        issuer: &IdIssuer,
        name: impl Into<String>,
        agenda_support: f64,
    ) -> Result<Self, ValidationError> {
        let id = issuer.next_actor_id();
        Ok(Self {
            id,
            name: default_name(name.into(), "Speaker", id),
            agenda_support: ensure_unit("agenda_support", agenda_support)?,
        })
    }

    /// The speaker's id.
    #[must_use]
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// The speaker's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Agenda support in `[0, 1]`.
    #[must_use]
    pub const fn agenda_support(&self) -> f64 {
        self.agenda_support
    }

    /// Updates the agenda support.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` outside `[0, 1]`.
    pub fn set_agenda_support(&mut self, support: f64) -> Result<(), ValidationError> {
        self.agenda_support = ensure_unit("agenda_support", support)?;
        Ok(())
    }
}

/// The president, with an approval rating.
#[derive(Debug, Clone, PartialEq)]
pub struct President {
    id: ActorId,
    name: String,
    approval_rating: f64,
}

impl President {
    /// Creates a president.
    ///
    /// An empty name defaults to `President_{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` if `approval_rating`
    /// is outside `[0, 1]`.
    pub fn new(
        issuer: &IdIssuer,
        name: impl Into<String>,
        approval_rating: f64,
    ) -> Result<Self, ValidationError> {
        let id = issuer.next_actor_id();
        Ok(Self {
            id,
            name: default_name(name.into(), "President", id),
            approval_rating: ensure_unit("approval_rating", approval_rating)?,
        })
    }

    /// The president's id.
    #[must_use]
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// The president's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Approval rating in `[0, 1]`.
    #[must_use]
    pub const fn approval_rating(&self) -> f64 {
        self.approval_rating
    }

    /// Updates the approval rating.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScalarOutOfRange` outside `[0, 1]`.
    pub fn set_approval_rating(&mut self, rating: f64) -> Result<(), ValidationError> {
        self.approval_rating = ensure_unit("approval_rating", rating)?;
        Ok(())
    }
}

fn default_name(name: String, prefix: &str, id: ActorId) -> String {
    if name.is_empty() {
        format!("{prefix}_{id}")
    } else {
        name
    }
}
