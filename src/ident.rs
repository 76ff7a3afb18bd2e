//! Identity issuance for simulation entities.
//!
//! Every actor, signal, bill, and chamber carries a small numeric id
//! drawn from an [`IdIssuer`]. The issuer keeps one independent monotonic
//! counter per entity category; each increment is atomic, so concurrent
//! creators never observe duplicate identifiers. The issuer is an
//! explicitly passed service rather than ambient global state, which
//! keeps simulations isolable and tests order-independent.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier for a decision actor (voter, lobbyist, whip, speaker, president).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(u64);

impl ActorId {
    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for an influence signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalId(u64);

impl SignalId {
    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(u64);

impl BillId {
    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a chamber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChamberId(u64);

impl ChamberId {
    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChamberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues unique, monotonically increasing ids per entity category.
///
/// Counters start at zero and the first issued id in each category is 1.
/// The four categories are independent: issuing a signal id does not
/// advance the actor counter.
///
/// # Examples
///
/// ```
/// use floorsim::IdIssuer;
///
/// let issuer = IdIssuer::new();
/// let a = issuer.next_actor_id();
/// let b = issuer.next_actor_id();
/// assert_ne!(a, b);
/// assert_eq!(issuer.next_signal_id().get(), 1);
/// ```
#[derive(Debug, Default)]
pub struct IdIssuer {
    actors: AtomicU64,
    signals: AtomicU64,
    bills: AtomicU64,
    chambers: AtomicU64,
}

impl IdIssuer {
    /// Creates an issuer with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next actor id.
    pub fn next_actor_id(&self) -> ActorId {
        ActorId(self.actors.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Issues the next signal id.
    pub fn next_signal_id(&self) -> SignalId {
        SignalId(self.signals.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Issues the next bill id.
    pub fn next_bill_id(&self) -> BillId {
        BillId(self.bills.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Issues the next chamber id.
    pub fn next_chamber_id(&self) -> ChamberId {
        ChamberId(self.chambers.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Resets all counters to zero.
    ///
    /// Intended for test isolation only; resetting while entities from
    /// the previous epoch are still alive will reissue their ids.
    pub fn reset(&self) {
        self.actors.store(0, Ordering::Relaxed);
        self.signals.store(0, Ordering::Relaxed);
        self.bills.store(0, Ordering::Relaxed);
        self.chambers.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn ids_are_monotonic_per_category() {
        let issuer = IdIssuer::new();
        assert_eq!(issuer.next_actor_id().get(), 1);
        assert_eq!(issuer.next_actor_id().get(), 2);
        assert_eq!(issuer.next_actor_id().get(), 3);
    }

    #[test]
    fn categories_are_independent() {
        let issuer = IdIssuer::new();
        let _ = issuer.next_actor_id();
        let _ = issuer.next_actor_id();
        assert_eq!(issuer.next_signal_id().get(), 1);
        assert_eq!(issuer.next_bill_id().get(), 1);
        assert_eq!(issuer.next_chamber_id().get(), 1);
    }

    #[test]
    fn reset_restarts_counters() {
        let issuer = IdIssuer::new();
        let _ = issuer.next_bill_id();
        let _ = issuer.next_bill_id();
        issuer.reset();
        assert_eq!(issuer.next_bill_id().get(), 1);
    }

    #[test]
    fn concurrent_issuance_never_duplicates() {
        let issuer = Arc::new(IdIssuer::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let issuer = Arc::clone(&issuer);
            handles.push(std::thread::spawn(move || {
                (0..500).map(|_| issuer.next_actor_id().get()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate actor id {id}");
            }
        }
        assert_eq!(seen.len(), 8 * 500);
    }
}
