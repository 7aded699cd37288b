pub mod decimal;
pub mod errors;
pub mod policy;
pub mod quote;
pub mod submit;
pub mod types;
pub mod validate;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use policy::{InterestTier, LoanPolicy};
pub use quote::{quote, RepaymentQuote};
pub use submit::{
    submit_request, ErrorResponse, LoanRequestPayload, SubmissionAdapter, SubmissionReceipt,
};
pub use types::{BorrowerId, LoanRequestInput};
pub use validate::{validate, validate_parsed};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
