/// submission - wire an adapter implementation into the core
use loan_request_rs::{
    submit_request, ErrorResponse, LoanPolicy, LoanRequestInput, LoanRequestPayload,
    Result, SubmissionAdapter, SubmissionReceipt, Uuid, validate,
};

/// stand-in for an HTTP client talking to the loan service
struct InMemoryLoanService;

impl SubmissionAdapter for InMemoryLoanService {
    fn submit(
        &self,
        borrower: Uuid,
        request: &LoanRequestInput,
    ) -> Result<SubmissionReceipt> {
        // a real implementation posts this payload with a bearer credential
        let payload = LoanRequestPayload::from_input(request);
        println!("posting: {}", serde_json::to_string(&payload).unwrap());

        Ok(SubmissionReceipt {
            borrower,
            request: *request,
        })
    }
}

fn main() -> Result<()> {
    let policy = LoanPolicy::standard();
    let service = InMemoryLoanService;

    let input = validate("50000", "12", &policy)?;

    // submission without a resolved identity is blocked up front
    let err = submit_request(&service, None, &input).unwrap_err();
    println!("unauthenticated: {err}");

    // with an identity the request goes through
    let borrower = Uuid::new_v4();
    let receipt = submit_request(&service, Some(borrower), &input)?;
    println!("accepted for borrower {}", receipt.borrower);

    // error payloads from the service map to user-facing reasons
    let err = ErrorResponse::failure_from_body(r#"{"message":"too many open loans"}"#);
    println!("service error: {err}");
    let err = ErrorResponse::failure_from_body("<html>502</html>");
    println!("opaque error: {err}");

    Ok(())
}
