/// tiered rates - how the rate table drives the quote
use loan_request_rs::{quote, LoanPolicy, LoanRequestInput, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let policy = LoanPolicy::standard();

    println!("rate table (first match wins):");
    for tier in &policy.tiers {
        println!("  principal >= {:<8} -> {}/month", tier.threshold.to_string(), tier.monthly_rate);
    }
    println!();

    // boundaries are inclusive: exactly 50000 and 100000 take the higher tier
    for principal in [10_000, 49_999, 50_000, 99_999, 100_000, 250_000] {
        let input = LoanRequestInput::new(Money::from_major(principal), 12);
        let q = quote(&input, &policy);
        println!(
            "{:>7} for 12 months at {:>3} -> total {:.2}",
            principal,
            q.monthly_rate.to_string(),
            q.rounded_total()
        );
    }

    Ok(())
}
