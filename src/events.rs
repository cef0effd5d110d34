use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{LoanNumber, LoanStatus, Qualification};

/// all events that can be emitted by the lender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // funds ledger events
    FundsDeposited {
        amount: Money,
        available_funds: Money,
        timestamp: DateTime<Utc>,
    },
    FundsReserved {
        number: LoanNumber,
        amount: Money,
        available_funds: Money,
        pending_funds: Money,
        timestamp: DateTime<Utc>,
    },
    FundsReleased {
        number: LoanNumber,
        amount: Money,
        available_funds: Money,
        pending_funds: Money,
        timestamp: DateTime<Utc>,
    },
    FundsDisbursed {
        number: LoanNumber,
        amount: Money,
        pending_funds: Money,
        timestamp: DateTime<Utc>,
    },

    // lifecycle events
    LoanRegistered {
        number: LoanNumber,
        requested_amount: Money,
    },
    LoanEvaluated {
        number: LoanNumber,
        qualification: Qualification,
        offer: Money,
        status: LoanStatus,
    },
    LoanPutOnHold {
        number: LoanNumber,
        required: Money,
        available: Money,
        timestamp: DateTime<Utc>,
    },
    LoanApproved {
        number: LoanNumber,
        amount: Money,
        approved_date: NaiveDate,
    },
    LoanAccepted {
        number: LoanNumber,
        amount: Money,
        timestamp: DateTime<Utc>,
    },
    LoanRejected {
        number: LoanNumber,
        amount: Money,
        timestamp: DateTime<Utc>,
    },
    LoanExpired {
        number: LoanNumber,
        amount: Money,
        days_outstanding: i64,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_drains_store() {
        let mut store = EventStore::new();
        store.emit(Event::LoanRegistered {
            number: 1,
            requested_amount: Money::from_major(125_000),
        });
        store.emit(Event::LoanEvaluated {
            number: 1,
            qualification: Qualification::Qualified,
            offer: Money::from_major(125_000),
            status: LoanStatus::Qualified,
        });

        let events = store.take_events();
        assert_eq!(events.len(), 2);
        assert!(store.events().is_empty());
    }
}
