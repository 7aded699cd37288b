use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for an authenticated borrower
pub type BorrowerId = Uuid;

/// validated loan request
///
/// produced by the validation gate; the calculator assumes
/// `principal >= policy minimum` and `term_months >= 1` and
/// does not re-check them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequestInput {
    pub principal: Money,
    pub term_months: u32,
}

impl LoanRequestInput {
    pub fn new(principal: Money, term_months: u32) -> Self {
        Self {
            principal,
            term_months,
        }
    }
}
