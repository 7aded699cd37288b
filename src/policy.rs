use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// one rule in the rate table: principal at or above `threshold` qualifies
/// for `monthly_rate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestTier {
    pub threshold: Money,
    pub monthly_rate: Rate,
}

impl InterestTier {
    pub fn new(threshold: Money, monthly_rate: Rate) -> Self {
        Self {
            threshold,
            monthly_rate,
        }
    }
}

/// loan policy: validation floor, fixed application fee, and the ordered
/// rate-tier table
///
/// tiers are kept in descending threshold order and evaluated
/// first-match-wins, so a principal exactly on a boundary takes the higher
/// tier's rate; the final tier must have a zero threshold so the table
/// covers every principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPolicy {
    pub minimum_principal: Money,
    pub application_fee: Money,
    pub tiers: Vec<InterestTier>,
}

impl LoanPolicy {
    /// create a policy, rejecting malformed tier tables
    pub fn new(
        minimum_principal: Money,
        application_fee: Money,
        tiers: Vec<InterestTier>,
    ) -> Result<Self> {
        let policy = Self {
            minimum_principal,
            application_fee,
            tiers,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// the standard lending policy: 10000 minimum, 500 fee,
    /// 4%/month at 100000, 3%/month at 50000, 2%/month below
    pub fn standard() -> Self {
        Self {
            minimum_principal: Money::from_major(10_000),
            application_fee: Money::from_major(500),
            tiers: vec![
                InterestTier::new(Money::from_major(100_000), Rate::from_decimal(dec!(0.04))),
                InterestTier::new(Money::from_major(50_000), Rate::from_decimal(dec!(0.03))),
                InterestTier::new(Money::ZERO, Rate::from_decimal(dec!(0.02))),
            ],
        }
    }

    /// select the monthly rate for a principal with a first-match-wins scan
    /// over the descending table
    ///
    /// total over principal >= 0 for any policy that passed `validate`
    pub fn rate_for(&self, principal: Money) -> Rate {
        self.tiers
            .iter()
            .find(|tier| principal >= tier.threshold)
            .map(|tier| tier.monthly_rate)
            .unwrap_or(Rate::ZERO)
    }

    /// check policy invariants
    pub fn validate(&self) -> Result<()> {
        if self.minimum_principal <= Money::ZERO {
            return Err(LoanError::InvalidPolicy {
                message: "minimum principal must be positive".to_string(),
            });
        }
        if self.application_fee.is_negative() {
            return Err(LoanError::InvalidPolicy {
                message: "application fee cannot be negative".to_string(),
            });
        }
        if self.tiers.is_empty() {
            return Err(LoanError::InvalidPolicy {
                message: "rate table is empty".to_string(),
            });
        }
        for pair in self.tiers.windows(2) {
            if pair[1].threshold >= pair[0].threshold {
                return Err(LoanError::InvalidPolicy {
                    message: format!(
                        "tier thresholds not strictly descending: {} then {}",
                        pair[0].threshold, pair[1].threshold
                    ),
                });
            }
        }
        let last = &self.tiers[self.tiers.len() - 1];
        if !last.threshold.is_zero() {
            return Err(LoanError::InvalidPolicy {
                message: format!(
                    "rate table does not cover all principals: lowest threshold is {}",
                    last.threshold
                ),
            });
        }
        for tier in &self.tiers {
            if tier.monthly_rate.is_negative() {
                return Err(LoanError::InvalidPolicy {
                    message: format!("negative rate at threshold {}", tier.threshold),
                });
            }
            if tier.threshold.is_negative() {
                return Err(LoanError::InvalidPolicy {
                    message: format!("negative threshold {}", tier.threshold),
                });
            }
        }
        Ok(())
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
