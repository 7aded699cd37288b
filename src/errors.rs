use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("invalid amount")]
    InvalidAmount,

    #[error("principal must be at least {minimum}")]
    PrincipalBelowMinimum {
        minimum: Money,
        provided: Money,
    },

    #[error("invalid term")]
    InvalidTerm,

    #[error("not authenticated")]
    NotAuthenticated,

    #[error("{reason}")]
    SubmissionFailed {
        reason: String,
    },

    #[error("invalid policy: {message}")]
    InvalidPolicy {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LoanError>;
