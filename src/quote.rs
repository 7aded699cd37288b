use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{Money, Rate};
use crate::policy::LoanPolicy;
use crate::types::LoanRequestInput;

/// repayment estimate for a validated loan request
///
/// derived and immutable; recomputed on demand rather than cached, and
/// never persisted by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaymentQuote {
    pub principal: Money,
    pub term_months: u32,
    pub monthly_rate: Rate,
    pub interest_per_month: Money,
    pub total_interest: Money,
    pub application_fee: Money,
    pub total_repayment: Money,
}

impl RepaymentQuote {
    /// total repayment rounded to cents for presentation
    pub fn rounded_total(&self) -> Money {
        self.total_repayment.round_dp(2)
    }
}

impl fmt::Display for RepaymentQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} over {} months at {} => total {:.2}",
            self.principal,
            self.term_months,
            self.monthly_rate,
            self.rounded_total()
        )
    }
}

/// compute the repayment quote for a validated input
///
/// simple flat interest: the monthly charge is principal times the tier
/// rate, applied unchanged across the whole term rather than amortized on
/// a declining balance; total over the validated domain and idempotent
pub fn quote(input: &LoanRequestInput, policy: &LoanPolicy) -> RepaymentQuote {
    let monthly_rate = policy.rate_for(input.principal);
    let interest_per_month = input.principal.monthly_interest(monthly_rate);
    let total_interest = interest_per_month * Decimal::from(input.term_months);
    let total_repayment = input.principal + total_interest + policy.application_fee;

    RepaymentQuote {
        principal: input.principal,
        term_months: input.term_months,
        monthly_rate,
        interest_per_month,
        total_interest,
        application_fee: policy.application_fee,
        total_repayment,
    }
}
