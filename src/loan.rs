use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::applicant::Applicant;
use crate::decimal::Money;
use crate::types::{LoanNumber, LoanStatus};

/// one loan application and its place in the lifecycle.
///
/// Status, amount and approval date are only ever written by the lender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    number: LoanNumber,
    applicant: Applicant,
    status: Option<LoanStatus>,
    amount: Money,
    approved_date: Option<NaiveDate>,
}

impl Loan {
    pub fn new(number: LoanNumber, applicant: Applicant) -> Self {
        Self {
            number,
            applicant,
            status: None,
            amount: Money::ZERO,
            approved_date: None,
        }
    }

    pub fn number(&self) -> LoanNumber {
        self.number
    }

    pub fn applicant(&self) -> &Applicant {
        &self.applicant
    }

    /// lifecycle status; `None` until the first evaluation
    pub fn status(&self) -> Option<LoanStatus> {
        self.status
    }

    /// offered or approved principal; zero until evaluation
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// business date the funds were reserved on; `None` unless approved
    pub fn approved_date(&self) -> Option<NaiveDate> {
        self.approved_date
    }

    pub(crate) fn applicant_mut(&mut self) -> &mut Applicant {
        &mut self.applicant
    }

    pub(crate) fn set_offer(&mut self, amount: Money, status: LoanStatus) {
        self.amount = amount;
        self.status = Some(status);
    }

    pub(crate) fn update_status(&mut self, status: LoanStatus) {
        self.status = Some(status);
    }

    pub(crate) fn record_approval(&mut self, date: NaiveDate) {
        self.status = Some(LoanStatus::Approved);
        self.approved_date = Some(date);
    }
}
