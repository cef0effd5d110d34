use serde::{Deserialize, Serialize};

use crate::config::UnderwritingConfig;
use crate::decimal::Money;
use crate::types::Qualification;

/// application facts captured once at submission time.
///
/// The four underwriting inputs are immutable after construction; only the
/// derived qualification is recomputed, and only by the lender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    dti: u32,
    credit_score: u32,
    savings: Money,
    requested_amount: Money,
    qualification: Option<Qualification>,
}

impl Applicant {
    pub fn new(dti: u32, credit_score: u32, savings: Money, requested_amount: Money) -> Self {
        Self {
            dti,
            credit_score,
            savings,
            requested_amount,
            qualification: None,
        }
    }

    pub fn dti(&self) -> u32 {
        self.dti
    }

    pub fn credit_score(&self) -> u32 {
        self.credit_score
    }

    pub fn savings(&self) -> Money {
        self.savings
    }

    pub fn requested_amount(&self) -> Money {
        self.requested_amount
    }

    /// tier assigned by the most recent evaluation, if any
    pub fn qualification(&self) -> Option<Qualification> {
        self.qualification
    }

    /// pure qualification check against the underwriting thresholds.
    ///
    /// dti must be strictly below the cap and the credit score strictly
    /// above the floor; savings strictly above the required ratio of the
    /// requested amount upgrades a partial qualification to full.
    pub fn assess(&self, config: &UnderwritingConfig) -> Qualification {
        if self.dti < config.max_dti && self.credit_score > config.min_credit_score {
            if self.savings > self.requested_amount * config.savings_ratio {
                Qualification::Qualified
            } else {
                Qualification::PartiallyQualified
            }
        } else {
            Qualification::NotQualified
        }
    }

    pub(crate) fn record_qualification(&mut self, qualification: Qualification) {
        self.qualification = Some(qualification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> UnderwritingConfig {
        UnderwritingConfig::default()
    }

    #[test]
    fn test_fully_qualified() {
        let applicant = Applicant::new(
            21,
            700,
            Money::from_major(100_000),
            Money::from_major(250_000),
        );
        assert_eq!(applicant.assess(&config()), Qualification::Qualified);
    }

    #[test]
    fn test_high_dti_not_qualified() {
        let applicant = Applicant::new(
            37,
            700,
            Money::from_major(100_000),
            Money::from_major(250_000),
        );
        assert_eq!(applicant.assess(&config()), Qualification::NotQualified);
    }

    #[test]
    fn test_low_credit_score_not_qualified() {
        let applicant = Applicant::new(
            30,
            600,
            Money::from_major(100_000),
            Money::from_major(250_000),
        );
        assert_eq!(applicant.assess(&config()), Qualification::NotQualified);
    }

    #[test]
    fn test_low_savings_partially_qualified() {
        let applicant = Applicant::new(
            30,
            700,
            Money::from_major(50_000),
            Money::from_major(250_000),
        );
        assert_eq!(
            applicant.assess(&config()),
            Qualification::PartiallyQualified
        );
    }

    #[test]
    fn test_dti_boundary_is_exclusive() {
        let applicant = Applicant::new(
            36,
            700,
            Money::from_major(100_000),
            Money::from_major(250_000),
        );
        assert_eq!(applicant.assess(&config()), Qualification::NotQualified);
    }

    #[test]
    fn test_credit_score_boundary_is_exclusive() {
        let applicant = Applicant::new(
            21,
            620,
            Money::from_major(100_000),
            Money::from_major(250_000),
        );
        assert_eq!(applicant.assess(&config()), Qualification::NotQualified);
    }

    #[test]
    fn test_savings_boundary_is_exclusive() {
        // savings at exactly 25% of requested stays partial
        let applicant = Applicant::new(
            21,
            700,
            Money::from_major(62_500),
            Money::from_major(250_000),
        );
        assert_eq!(
            applicant.assess(&config()),
            Qualification::PartiallyQualified
        );
    }

    #[test]
    fn test_assessment_is_deterministic() {
        let applicant = Applicant::new(
            30,
            700,
            Money::from_major(50_000),
            Money::from_major(250_000),
        );
        let first = applicant.assess(&config());
        for _ in 0..5 {
            assert_eq!(applicant.assess(&config()), first);
        }
    }
}
