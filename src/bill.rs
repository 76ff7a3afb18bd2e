//! Bills.
//!
//! A bill is the item being voted on: a position in policy space plus a
//! running pass/fail tally. The tally is mutated only by the chamber,
//! once per ballot round, after the outcome is known.

use std::fmt;

use crate::ident::{BillId, IdIssuer};
use crate::rng::VoteRng;
use crate::space::Position;

/// A proposal located at a point in policy space.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    id: BillId,
    position: Position,
    n_passed: u64,
    n_failed: u64,
}

impl Bill {
    /// Creates a bill at the given position.
    #[must_use]
    pub fn new(issuer: &IdIssuer, position: Position) -> Self {
        Self {
            id: issuer.next_bill_id(),
            position,
            n_passed: 0,
            n_failed: 0,
        }
    }

    /// The bill's id.
    #[must_use]
    pub const fn id(&self) -> BillId {
        self.id
    }

    /// The bill's policy-space position.
    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    /// Replaces the position with a uniform random draw of `dim`
    /// coordinates.
    pub fn randomize_position(&mut self, dim: usize, rng: &mut VoteRng) {
        self.position = Position::random(dim, rng);
    }

    /// Times the bill has passed.
    #[must_use]
    pub const fn n_passed(&self) -> u64 {
        self.n_passed
    }

    /// Times the bill has failed.
    #[must_use]
    pub const fn n_failed(&self) -> u64 {
        self.n_failed
    }

    pub(crate) fn record_pass(&mut self) {
        self.n_passed += 1;
    }

    pub(crate) fn record_fail(&mut self) {
        self.n_failed += 1;
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bill {}", self.id)?;
        writeln!(f, "Position: {}", self.position)?;
        write!(f, "Passed: {}, Failed: {}", self.n_passed, self.n_failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bill_has_clean_tally() {
        let issuer = IdIssuer::new();
        let bill = Bill::new(&issuer, Position::new(vec![0.1, 0.2]));
        assert_eq!(bill.n_passed(), 0);
        assert_eq!(bill.n_failed(), 0);
    }

    #[test]
    fn randomize_position_sets_requested_dim() {
        let issuer = IdIssuer::new();
        let mut rng = VoteRng::seeded(3);
        let mut bill = Bill::new(&issuer, Position::empty());
        bill.randomize_position(4, &mut rng);
        assert_eq!(bill.position().dim(), 4);
    }

    #[test]
    fn report_mentions_tally() {
        let issuer = IdIssuer::new();
        let mut bill = Bill::new(&issuer, Position::new(vec![0.5]));
        bill.record_pass();
        bill.record_pass();
        bill.record_fail();
        let report = format!("{bill}");
        assert!(report.contains("Passed: 2, Failed: 1"));
    }
}
