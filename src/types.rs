use serde::{Deserialize, Serialize};
use std::fmt;

/// caller-supplied identifier for a loan, unique within one lender
pub type LoanNumber = u32;

/// applicant eligibility tier derived from underwriting thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Qualification {
    /// passed both threshold checks with savings above the required ratio
    Qualified,
    /// passed both threshold checks but savings at or below the ratio
    PartiallyQualified,
    /// failed the dti or credit score threshold
    NotQualified,
}

impl Qualification {
    /// lifecycle status a freshly evaluated loan starts in.
    ///
    /// Both qualified tiers surface as `LoanStatus::Qualified`; only the
    /// offered amount distinguishes them.
    pub fn initial_status(&self) -> LoanStatus {
        match self {
            Qualification::Qualified | Qualification::PartiallyQualified => LoanStatus::Qualified,
            Qualification::NotQualified => LoanStatus::Denied,
        }
    }
}

impl fmt::Display for Qualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Qualification::Qualified => "qualified",
            Qualification::PartiallyQualified => "partially qualified",
            Qualification::NotQualified => "not qualified",
        };
        write!(f, "{}", s)
    }
}

/// loan lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// offer computed, funds not yet reserved
    Qualified,
    /// applicant failed underwriting, no offer
    Denied,
    /// offer exceeds available funds, waiting on a deposit
    OnHold,
    /// funds reserved, waiting on the applicant's decision
    Approved,
    /// applicant took the loan, funds disbursed
    Accepted,
    /// applicant declined, funds returned
    Rejected,
    /// approval left undecided past the allowed window, funds returned
    Expired,
}

impl LoanStatus {
    /// statuses that no operation can move a loan out of
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LoanStatus::Denied | LoanStatus::Accepted | LoanStatus::Rejected | LoanStatus::Expired
        )
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoanStatus::Qualified => "qualified",
            LoanStatus::Denied => "denied",
            LoanStatus::OnHold => "on hold",
            LoanStatus::Approved => "approved",
            LoanStatus::Accepted => "accepted",
            LoanStatus::Rejected => "rejected",
            LoanStatus::Expired => "expired",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_qualified_tiers_share_initial_status() {
        assert_eq!(
            Qualification::Qualified.initial_status(),
            LoanStatus::Qualified
        );
        assert_eq!(
            Qualification::PartiallyQualified.initial_status(),
            LoanStatus::Qualified
        );
        assert_eq!(
            Qualification::NotQualified.initial_status(),
            LoanStatus::Denied
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(LoanStatus::OnHold.to_string(), "on hold");
        assert_eq!(LoanStatus::Approved.to_string(), "approved");
        assert_eq!(
            Qualification::PartiallyQualified.to_string(),
            "partially qualified"
        );
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(LoanStatus::Expired.is_terminal());
        assert!(LoanStatus::Denied.is_terminal());
        assert!(!LoanStatus::OnHold.is_terminal());
        assert!(!LoanStatus::Approved.is_terminal());
    }
}
