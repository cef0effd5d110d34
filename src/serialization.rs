/// serialization support for loan snapshots
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::applicant::Applicant;
use crate::decimal::Money;
use crate::loan::Loan;
use crate::types::{LoanNumber, LoanStatus, Qualification};

/// serializable view of one applicant's facts and qualification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantView {
    pub dti: u32,
    pub credit_score: u32,
    pub savings: Money,
    pub requested_amount: Money,
    pub qualification: Option<Qualification>,
}

impl ApplicantView {
    pub fn from_applicant(applicant: &Applicant) -> Self {
        Self {
            dti: applicant.dti(),
            credit_score: applicant.credit_score(),
            savings: applicant.savings(),
            requested_amount: applicant.requested_amount(),
            qualification: applicant.qualification(),
        }
    }
}

/// serializable view of one loan, used for display and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanView {
    pub loan_number: LoanNumber,
    pub applicant: ApplicantView,
    pub status: Option<LoanStatus>,
    pub loan_amount: Money,
    pub approved_date: Option<NaiveDate>,
}

impl LoanView {
    pub fn from_loan(loan: &Loan) -> Self {
        Self {
            loan_number: loan.number(),
            applicant: ApplicantView::from_applicant(loan.applicant()),
            status: loan.status(),
            loan_amount: loan.amount(),
            approved_date: loan.approved_date(),
        }
    }
}
