use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// the two fund pools backing the loan collection.
///
/// Funds only enter through `deposit` and only leave through `disburse`;
/// `reserve` and `release` move money between the pools without changing
/// the tracked total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    available_funds: Money,
    pending_funds: Money,
}

impl LedgerState {
    pub fn new(initial_funds: Money) -> Self {
        Self {
            available_funds: initial_funds,
            pending_funds: Money::ZERO,
        }
    }

    /// unreserved funds
    pub fn available_funds(&self) -> Money {
        self.available_funds
    }

    /// funds reserved against approved-but-undecided loans
    pub fn pending_funds(&self) -> Money {
        self.pending_funds
    }

    /// everything the ledger currently tracks
    pub fn tracked_total(&self) -> Money {
        self.available_funds + self.pending_funds
    }

    pub(crate) fn deposit(&mut self, amount: Money) {
        self.available_funds += amount;
    }

    /// move funds from available to pending; no-op returning false when
    /// the available pool cannot cover the amount
    pub(crate) fn reserve(&mut self, amount: Money) -> bool {
        if amount > self.available_funds {
            return false;
        }
        self.available_funds -= amount;
        self.pending_funds += amount;
        true
    }

    /// return reserved funds to the available pool
    pub(crate) fn release(&mut self, amount: Money) {
        self.pending_funds -= amount;
        self.available_funds += amount;
    }

    /// reserved funds leave the tracked pools entirely
    pub(crate) fn disburse(&mut self, amount: Money) {
        self.pending_funds -= amount;
    }
}

/// ledger snapshot for audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub snapshot_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub available_funds: Money,
    pub pending_funds: Money,
    pub trigger: String,
}

impl LedgerSnapshot {
    pub fn capture(state: &LedgerState, trigger: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            snapshot_id: Uuid::new_v4(),
            timestamp,
            available_funds: state.available_funds,
            pending_funds: state.pending_funds,
            trigger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_moves_between_pools() {
        let mut ledger = LedgerState::new(Money::from_major(100_000));

        assert!(ledger.reserve(Money::from_major(60_000)));
        assert_eq!(ledger.available_funds(), Money::from_major(40_000));
        assert_eq!(ledger.pending_funds(), Money::from_major(60_000));
        assert_eq!(ledger.tracked_total(), Money::from_major(100_000));
    }

    #[test]
    fn test_reserve_refuses_overdraw() {
        let mut ledger = LedgerState::new(Money::from_major(100_000));

        assert!(!ledger.reserve(Money::from_major(100_001)));
        assert_eq!(ledger.available_funds(), Money::from_major(100_000));
        assert_eq!(ledger.pending_funds(), Money::ZERO);
    }

    #[test]
    fn test_release_restores_available() {
        let mut ledger = LedgerState::new(Money::from_major(100_000));
        ledger.reserve(Money::from_major(25_000));
        ledger.release(Money::from_major(25_000));

        assert_eq!(ledger.available_funds(), Money::from_major(100_000));
        assert_eq!(ledger.pending_funds(), Money::ZERO);
    }

    #[test]
    fn test_disburse_shrinks_tracked_total() {
        let mut ledger = LedgerState::new(Money::from_major(100_000));
        ledger.reserve(Money::from_major(25_000));
        ledger.disburse(Money::from_major(25_000));

        assert_eq!(ledger.available_funds(), Money::from_major(75_000));
        assert_eq!(ledger.pending_funds(), Money::ZERO);
        assert_eq!(ledger.tracked_total(), Money::from_major(75_000));
    }
}
