use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{LenderError, Result};

/// underwriting thresholds and the approval expiration window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnderwritingConfig {
    /// exclusive upper bound on debt-to-income, integer percent
    pub max_dti: u32,
    /// exclusive lower bound on credit score
    pub min_credit_score: u32,
    /// savings must strictly exceed this ratio of the requested amount
    /// for the full offer
    pub savings_ratio: Rate,
    /// approved loans left undecided strictly longer than this many
    /// whole days are swept as expired
    pub expiration_days: i64,
}

impl Default for UnderwritingConfig {
    fn default() -> Self {
        Self {
            max_dti: 36,
            min_credit_score: 620,
            savings_ratio: Rate::from_decimal(dec!(0.25)),
            expiration_days: 3,
        }
    }
}

impl UnderwritingConfig {
    /// create a validated configuration
    pub fn new(
        max_dti: u32,
        min_credit_score: u32,
        savings_ratio: Rate,
        expiration_days: i64,
    ) -> Result<Self> {
        if savings_ratio.is_negative() {
            return Err(LenderError::InvalidConfiguration {
                message: format!("savings ratio must not be negative: {}", savings_ratio),
            });
        }
        if expiration_days < 0 {
            return Err(LenderError::InvalidConfiguration {
                message: format!("expiration days must not be negative: {}", expiration_days),
            });
        }

        Ok(Self {
            max_dti,
            min_credit_score,
            savings_ratio,
            expiration_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = UnderwritingConfig::default();
        assert_eq!(config.max_dti, 36);
        assert_eq!(config.min_credit_score, 620);
        assert_eq!(config.savings_ratio, Rate::from_percentage(25));
        assert_eq!(config.expiration_days, 3);
    }

    #[test]
    fn test_rejects_negative_ratio() {
        let result = UnderwritingConfig::new(36, 620, Rate::from_decimal(dec!(-0.1)), 3);
        assert!(matches!(
            result,
            Err(LenderError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_window() {
        let result = UnderwritingConfig::new(36, 620, Rate::from_percentage(25), -1);
        assert!(matches!(
            result,
            Err(LenderError::InvalidConfiguration { .. })
        ));
    }
}
