use thiserror::Error;

use crate::decimal::Money;
use crate::types::LoanNumber;

#[derive(Error, Debug)]
pub enum LenderError {
    #[error("You can't proceed with the loan application")]
    NotQualifiedApplicant,

    #[error("loan not found: {number}")]
    LoanNotFound {
        number: LoanNumber,
    },

    #[error("duplicate loan number: {number}")]
    DuplicateLoanNumber {
        number: LoanNumber,
    },

    #[error("invalid state: current {current}, expected {expected}")]
    InvalidState {
        current: String,
        expected: String,
    },

    #[error("invalid amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LenderError>;
