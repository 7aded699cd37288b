use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};
use crate::types::{BorrowerId, LoanRequestInput};

/// fallback reason when the collaborator gives nothing actionable
pub const GENERIC_FAILURE: &str = "submission failed";

/// acknowledgment returned by a submission collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub borrower: BorrowerId,
    pub request: LoanRequestInput,
}

/// external collaborator that persists loan requests
///
/// this crate defines the seam only; transports, timeouts, and retry policy
/// belong to the implementation and its caller
pub trait SubmissionAdapter {
    fn submit(&self, borrower: BorrowerId, request: &LoanRequestInput) -> Result<SubmissionReceipt>;
}

/// forward a validated request through an adapter, requiring a resolved
/// borrower identity first
///
/// quoting never needs authentication; submission always does
pub fn submit_request<A: SubmissionAdapter>(
    adapter: &A,
    borrower: Option<BorrowerId>,
    request: &LoanRequestInput,
) -> Result<SubmissionReceipt> {
    let borrower = borrower.ok_or(LoanError::NotAuthenticated)?;
    adapter.submit(borrower, request)
}

/// wire shape of a submission request: principal travels as a decimal
/// string, term as an integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequestPayload {
    #[serde(with = "rust_decimal::serde::str")]
    pub principal: Decimal,
    pub months_to_repay: u32,
}

impl LoanRequestPayload {
    pub fn from_input(input: &LoanRequestInput) -> Self {
        Self {
            principal: input.principal.as_decimal(),
            months_to_repay: input.term_months,
        }
    }
}

/// wire shape of a collaborator error response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
}

impl ErrorResponse {
    /// map an error response into a submission failure, falling back to the
    /// generic reason when no usable message is present
    pub fn into_failure(self) -> LoanError {
        let reason = match self.message {
            Some(m) if !m.trim().is_empty() => m,
            _ => GENERIC_FAILURE.to_string(),
        };
        LoanError::SubmissionFailed { reason }
    }

    /// map a raw response body; unparseable bodies get the generic reason
    pub fn failure_from_body(body: &str) -> LoanError {
        serde_json::from_str::<ErrorResponse>(body)
            .unwrap_or_default()
            .into_failure()
    }
}

/// failure for a transport-level error with no response at all
pub fn transport_failure() -> LoanError {
    LoanError::SubmissionFailed {
        reason: GENERIC_FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use std::cell::RefCell;
    use uuid::Uuid;

    /// records submissions instead of sending them anywhere
    struct RecordingAdapter {
        submitted: RefCell<Vec<(BorrowerId, LoanRequestInput)>>,
        fail_with: Option<String>,
    }

    impl RecordingAdapter {
        fn accepting() -> Self {
            Self {
                submitted: RefCell::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                submitted: RefCell::new(Vec::new()),
                fail_with: Some(reason.to_string()),
            }
        }
    }

    impl SubmissionAdapter for RecordingAdapter {
        fn submit(
            &self,
            borrower: BorrowerId,
            request: &LoanRequestInput,
        ) -> Result<SubmissionReceipt> {
            if let Some(reason) = &self.fail_with {
                return Err(LoanError::SubmissionFailed {
                    reason: reason.clone(),
                });
            }
            self.submitted.borrow_mut().push((borrower, *request));
            Ok(SubmissionReceipt {
                borrower,
                request: *request,
            })
        }
    }

    fn request() -> LoanRequestInput {
        LoanRequestInput::new(Money::from_major(20_000), 12)
    }

    #[test]
    fn test_submit_with_identity() {
        let adapter = RecordingAdapter::accepting();
        let borrower = Uuid::new_v4();

        let receipt = submit_request(&adapter, Some(borrower), &request()).unwrap();

        assert_eq!(receipt.borrower, borrower);
        assert_eq!(receipt.request, request());
        assert_eq!(adapter.submitted.borrow().len(), 1);
    }

    #[test]
    fn test_missing_identity_blocks_submission() {
        let adapter = RecordingAdapter::accepting();

        let err = submit_request(&adapter, None, &request()).unwrap_err();

        assert_eq!(err, LoanError::NotAuthenticated);
        // nothing reached the adapter
        assert!(adapter.submitted.borrow().is_empty());
    }

    #[test]
    fn test_adapter_failure_surfaces() {
        let adapter = RecordingAdapter::failing("loan limit reached");
        let borrower = Uuid::new_v4();

        let err = submit_request(&adapter, Some(borrower), &request()).unwrap_err();

        assert_eq!(err.to_string(), "loan limit reached");
    }

    #[test]
    fn test_payload_wire_shape() {
        let input = LoanRequestInput::new(Money::from_str_exact("20000.50").unwrap(), 12);
        let payload = LoanRequestPayload::from_input(&input);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["principal"], "20000.50");
        assert_eq!(json["monthsToRepay"], 12);
    }

    #[test]
    fn test_payload_accepts_string_principal() {
        let payload: LoanRequestPayload =
            serde_json::from_str(r#"{"principal":"50000","monthsToRepay":6}"#).unwrap();

        assert_eq!(payload.principal, Decimal::from(50_000));
        assert_eq!(payload.months_to_repay, 6);
    }

    #[test]
    fn test_error_message_surfaced() {
        let err = ErrorResponse::failure_from_body(r#"{"message":"too many open loans"}"#);
        assert_eq!(err.to_string(), "too many open loans");
    }

    #[test]
    fn test_missing_message_is_generic() {
        let err = ErrorResponse::failure_from_body(r#"{"code":500}"#);
        assert_eq!(err.to_string(), GENERIC_FAILURE);

        let err = ErrorResponse::failure_from_body(r#"{"message":""}"#);
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn test_unparseable_body_is_generic() {
        let err = ErrorResponse::failure_from_body("<html>502 Bad Gateway</html>");
        assert_eq!(err.to_string(), GENERIC_FAILURE);

        assert_eq!(transport_failure().to_string(), GENERIC_FAILURE);
    }
}
