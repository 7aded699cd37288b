use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::policy::LoanPolicy;
use crate::types::LoanRequestInput;

/// validation gate for raw, untrusted form input
///
/// parses text fields and checks them against policy; nothing reaches the
/// calculator or the submission boundary without passing here first
pub fn validate(principal_raw: &str, term_raw: &str, policy: &LoanPolicy) -> Result<LoanRequestInput> {
    let principal = parse_principal(principal_raw)?;
    let term_months = parse_term(term_raw)?;
    validate_parsed(principal, term_months, policy)
}

/// validate amounts that already arrived as numbers
pub fn validate_parsed(
    principal: Money,
    term_months: u32,
    policy: &LoanPolicy,
) -> Result<LoanRequestInput> {
    if principal < policy.minimum_principal {
        return Err(LoanError::PrincipalBelowMinimum {
            minimum: policy.minimum_principal,
            provided: principal,
        });
    }
    if term_months < 1 {
        return Err(LoanError::InvalidTerm);
    }
    Ok(LoanRequestInput::new(principal, term_months))
}

fn parse_principal(raw: &str) -> Result<Money> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LoanError::InvalidAmount);
    }
    Money::from_str_exact(trimmed).map_err(|_| LoanError::InvalidAmount)
}

fn parse_term(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LoanError::InvalidTerm);
    }
    trimmed.parse::<u32>().map_err(|_| LoanError::InvalidTerm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> LoanPolicy {
        LoanPolicy::standard()
    }

    #[test]
    fn test_accepts_valid_input() {
        let input = validate("10000", "6", &policy()).unwrap();

        assert_eq!(input.principal, Money::from_major(10_000));
        assert_eq!(input.term_months, 6);
    }

    #[test]
    fn test_accepts_decimal_principal() {
        let input = validate("12500.50", "12", &policy()).unwrap();
        assert_eq!(input.principal, Money::from_str_exact("12500.50").unwrap());
    }

    #[test]
    fn test_rejects_below_minimum() {
        let err = validate("9999", "6", &policy()).unwrap_err();

        assert_eq!(
            err,
            LoanError::PrincipalBelowMinimum {
                minimum: Money::from_major(10_000),
                provided: Money::from_major(9_999),
            }
        );
        assert_eq!(err.to_string(), "principal must be at least 10000");
    }

    #[test]
    fn test_rejects_non_numeric_principal() {
        assert_eq!(validate("a lot", "6", &policy()).unwrap_err(), LoanError::InvalidAmount);
        assert_eq!(validate("", "6", &policy()).unwrap_err(), LoanError::InvalidAmount);
        assert_eq!(validate("   ", "6", &policy()).unwrap_err(), LoanError::InvalidAmount);
    }

    #[test]
    fn test_rejects_zero_term() {
        assert_eq!(validate("20000", "0", &policy()).unwrap_err(), LoanError::InvalidTerm);
    }

    #[test]
    fn test_rejects_bad_terms() {
        assert_eq!(validate("20000", "-3", &policy()).unwrap_err(), LoanError::InvalidTerm);
        assert_eq!(validate("20000", "6.5", &policy()).unwrap_err(), LoanError::InvalidTerm);
        assert_eq!(validate("20000", "", &policy()).unwrap_err(), LoanError::InvalidTerm);
        assert_eq!(validate("20000", "soon", &policy()).unwrap_err(), LoanError::InvalidTerm);
    }

    #[test]
    fn test_principal_checked_before_term() {
        // both fields invalid: the amount rejection wins, matching the
        // order the form reports errors
        let err = validate("5000", "0", &policy()).unwrap_err();
        assert!(matches!(err, LoanError::PrincipalBelowMinimum { .. }));
    }

    #[test]
    fn test_validate_parsed() {
        let input = validate_parsed(Money::from_major(50_000), 12, &policy()).unwrap();
        assert_eq!(input.term_months, 12);

        let err = validate_parsed(Money::from_major(50_000), 0, &policy()).unwrap_err();
        assert_eq!(err, LoanError::InvalidTerm);
    }

}
