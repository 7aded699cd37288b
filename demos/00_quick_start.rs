/// quick start - validate raw form input and quote the repayment
use loan_request_rs::{quote, validate, LoanPolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let policy = LoanPolicy::standard();

    // raw text exactly as it arrives from a form
    let input = validate("10000", "6", &policy)?;

    let q = quote(&input, &policy);
    println!("monthly rate:       {}", q.monthly_rate);
    println!("interest per month: {:.2}", q.interest_per_month);
    println!("total interest:     {:.2}", q.total_interest);
    println!("application fee:    {:.2}", q.application_fee);
    println!("total repayment:    {:.2}", q.rounded_total());

    // a rejection carries the reason to show the user
    match validate("9999", "6", &policy) {
        Ok(_) => unreachable!(),
        Err(reason) => println!("rejected: {reason}"),
    }

    Ok(())
}
