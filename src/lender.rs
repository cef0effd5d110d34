use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;

use crate::applicant::Applicant;
use crate::config::UnderwritingConfig;
use crate::decimal::Money;
use crate::errors::{LenderError, Result};
use crate::events::{Event, EventStore};
use crate::loan::Loan;
use crate::serialization::LoanView;
use crate::state::{LedgerSnapshot, LedgerState};
use crate::types::{LoanNumber, LoanStatus, Qualification};

/// the lender: owns the funds ledger and the loan collection, and runs
/// qualification, sanctioning, decision resolution and the expiration sweep.
///
/// Operations are synchronous and run to completion; a deployment with
/// concurrent callers must serialize access to one lender instance.
pub struct Lender {
    pub config: UnderwritingConfig,
    ledger: LedgerState,
    loans: Vec<Loan>,
    events: EventStore,
    snapshots: Vec<LedgerSnapshot>,
}

impl Lender {
    /// create a lender with an initial funds balance
    pub fn new(config: UnderwritingConfig, initial_funds: Money) -> Result<Self> {
        if initial_funds.is_negative() {
            return Err(LenderError::InvalidAmount {
                amount: initial_funds,
            });
        }

        Ok(Self {
            config,
            ledger: LedgerState::new(initial_funds),
            loans: Vec::new(),
            events: EventStore::new(),
            snapshots: Vec::new(),
        })
    }

    /// create a lender with the default underwriting thresholds
    pub fn with_funds(initial_funds: Money) -> Result<Self> {
        Self::new(UnderwritingConfig::default(), initial_funds)
    }

    /// available, unreserved funds
    pub fn available_funds(&self) -> Money {
        self.ledger.available_funds()
    }

    /// funds reserved against approved-but-undecided loans
    pub fn pending_funds(&self) -> Money {
        self.ledger.pending_funds()
    }

    /// the funds ledger
    pub fn ledger(&self) -> &LedgerState {
        &self.ledger
    }

    /// audit trail of ledger balances, one entry per ledger mutation
    pub fn snapshots(&self) -> &[LedgerSnapshot] {
        &self.snapshots
    }

    /// drain events collected since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// add funds to the available pool, returning the new balance
    pub fn deposit(&mut self, amount: Money, time: &SafeTimeProvider) -> Result<Money> {
        if amount.is_negative() {
            return Err(LenderError::InvalidAmount { amount });
        }

        self.ledger.deposit(amount);

        self.events.emit(Event::FundsDeposited {
            amount,
            available_funds: self.ledger.available_funds(),
            timestamp: time.now(),
        });
        self.snapshots.push(LedgerSnapshot::capture(
            &self.ledger,
            format!("deposit: {}", amount),
            time.now(),
        ));

        Ok(self.ledger.available_funds())
    }

    /// register a loan application under a caller-chosen number
    pub fn register_loan(&mut self, number: LoanNumber, applicant: Applicant) -> Result<()> {
        if self.loans.iter().any(|loan| loan.number() == number) {
            return Err(LenderError::DuplicateLoanNumber { number });
        }

        self.events.emit(Event::LoanRegistered {
            number,
            requested_amount: applicant.requested_amount(),
        });
        self.loans.push(Loan::new(number, applicant));

        Ok(())
    }

    /// evaluate the applicant and compute the offer.
    ///
    /// Recomputes qualification from the immutable application facts,
    /// overwriting any previous evaluation, then sets the offered amount
    /// and the intermediate status. Refuses loans that already hold or
    /// disposed of reserved funds.
    pub fn approve_loan(&mut self, number: LoanNumber) -> Result<LoanStatus> {
        let loan = self
            .loans
            .iter_mut()
            .find(|loan| loan.number() == number)
            .ok_or(LenderError::LoanNotFound { number })?;

        if let Some(status) = loan.status() {
            if !matches!(
                status,
                LoanStatus::Qualified | LoanStatus::Denied | LoanStatus::OnHold
            ) {
                return Err(LenderError::InvalidState {
                    current: status.to_string(),
                    expected: "pre-sanction".to_string(),
                });
            }
        }

        let qualification = loan.applicant().assess(&self.config);
        loan.applicant_mut().record_qualification(qualification);

        let offer = match qualification {
            Qualification::Qualified => loan.applicant().requested_amount(),
            Qualification::PartiallyQualified => loan.applicant().savings() * Decimal::from(4),
            Qualification::NotQualified => Money::ZERO,
        };
        let status = qualification.initial_status();
        loan.set_offer(offer, status);

        self.events.emit(Event::LoanEvaluated {
            number,
            qualification,
            offer,
            status,
        });

        Ok(status)
    }

    /// attempt to reserve funds for a loan.
    ///
    /// Re-runs the approval first. An ineligible applicant fails with the
    /// ledger untouched; an eligible offer either moves funds into the
    /// pending pool (`Approved`, stamped with today's date) or parks the
    /// loan `OnHold` until a deposit covers it.
    pub fn sanction_loan(
        &mut self,
        number: LoanNumber,
        time: &SafeTimeProvider,
    ) -> Result<LoanStatus> {
        let status = self.approve_loan(number)?;
        if status != LoanStatus::Qualified {
            return Err(LenderError::NotQualifiedApplicant);
        }

        let index = self
            .loans
            .iter()
            .position(|loan| loan.number() == number)
            .ok_or(LenderError::LoanNotFound { number })?;
        let amount = self.loans[index].amount();

        if self.ledger.reserve(amount) {
            let approved_date = time.now().date_naive();
            self.loans[index].record_approval(approved_date);

            self.events.emit(Event::LoanApproved {
                number,
                amount,
                approved_date,
            });
            self.events.emit(Event::FundsReserved {
                number,
                amount,
                available_funds: self.ledger.available_funds(),
                pending_funds: self.ledger.pending_funds(),
                timestamp: time.now(),
            });
            self.snapshots.push(LedgerSnapshot::capture(
                &self.ledger,
                format!("sanction: loan {}", number),
                time.now(),
            ));

            Ok(LoanStatus::Approved)
        } else {
            self.loans[index].update_status(LoanStatus::OnHold);

            self.events.emit(Event::LoanPutOnHold {
                number,
                required: amount,
                available: self.ledger.available_funds(),
                timestamp: time.now(),
            });

            Ok(LoanStatus::OnHold)
        }
    }

    /// record the applicant's decision on an approved loan.
    ///
    /// Acceptance disburses the reserved funds out of the tracked pools;
    /// rejection returns them to the available pool. Only legal while the
    /// loan is `Approved`.
    pub fn loan_accepted(
        &mut self,
        accepted: bool,
        number: LoanNumber,
        time: &SafeTimeProvider,
    ) -> Result<LoanStatus> {
        let index = self
            .loans
            .iter()
            .position(|loan| loan.number() == number)
            .ok_or(LenderError::LoanNotFound { number })?;

        if self.loans[index].status() != Some(LoanStatus::Approved) {
            return Err(LenderError::InvalidState {
                current: self.loans[index]
                    .status()
                    .map(|status| status.to_string())
                    .unwrap_or_else(|| "unevaluated".to_string()),
                expected: LoanStatus::Approved.to_string(),
            });
        }

        let amount = self.loans[index].amount();
        let status = if accepted {
            self.ledger.disburse(amount);
            self.loans[index].update_status(LoanStatus::Accepted);

            self.events.emit(Event::LoanAccepted {
                number,
                amount,
                timestamp: time.now(),
            });
            self.events.emit(Event::FundsDisbursed {
                number,
                amount,
                pending_funds: self.ledger.pending_funds(),
                timestamp: time.now(),
            });

            LoanStatus::Accepted
        } else {
            self.ledger.release(amount);
            self.loans[index].update_status(LoanStatus::Rejected);

            self.events.emit(Event::LoanRejected {
                number,
                amount,
                timestamp: time.now(),
            });
            self.events.emit(Event::FundsReleased {
                number,
                amount,
                available_funds: self.ledger.available_funds(),
                pending_funds: self.ledger.pending_funds(),
                timestamp: time.now(),
            });

            LoanStatus::Rejected
        };

        self.snapshots.push(LedgerSnapshot::capture(
            &self.ledger,
            format!("decision: loan {} {}", number, status),
            time.now(),
        ));

        Ok(status)
    }

    /// batch sweep releasing funds for approved loans left undecided past
    /// the expiration window. Returns the expired loan numbers in
    /// registration order.
    pub fn check_expired_loans(&mut self, time: &SafeTimeProvider) -> Vec<LoanNumber> {
        let today = time.now().date_naive();
        let mut expired = Vec::new();

        for index in 0..self.loans.len() {
            if self.loans[index].status() != Some(LoanStatus::Approved) {
                continue;
            }
            let Some(approved_date) = self.loans[index].approved_date() else {
                continue;
            };

            let days_outstanding = (today - approved_date).num_days();
            if days_outstanding <= self.config.expiration_days {
                continue;
            }

            let number = self.loans[index].number();
            let amount = self.loans[index].amount();

            self.ledger.release(amount);
            self.loans[index].update_status(LoanStatus::Expired);

            self.events.emit(Event::LoanExpired {
                number,
                amount,
                days_outstanding,
                timestamp: time.now(),
            });
            self.events.emit(Event::FundsReleased {
                number,
                amount,
                available_funds: self.ledger.available_funds(),
                pending_funds: self.ledger.pending_funds(),
                timestamp: time.now(),
            });
            self.snapshots.push(LedgerSnapshot::capture(
                &self.ledger,
                format!("expiration sweep: loan {}", number),
                time.now(),
            ));

            expired.push(number);
        }

        expired
    }

    /// look up a loan; absent numbers are `None`, not an error
    pub fn get_loan(&self, number: LoanNumber) -> Option<&Loan> {
        self.loans.iter().find(|loan| loan.number() == number)
    }

    /// all loans currently in the given status, in registration order
    pub fn filter_loans_by_status(&self, status: LoanStatus) -> Vec<LoanView> {
        self.loans
            .iter()
            .filter(|loan| loan.status() == Some(status))
            .map(LoanView::from_loan)
            .collect()
    }
}
