/// quick start - minimal example to get started
use mortgage_lender_rs::{Applicant, Lender, Money, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);

    // a lender with $300,000 on hand
    let mut lender = Lender::with_funds(Money::from_major(300_000))?;

    // register an application and run the approval
    let applicant = Applicant::new(
        21,
        700,
        Money::from_major(100_000),
        Money::from_major(125_000),
    );
    lender.register_loan(1, applicant)?;

    // sanction reserves the funds and stamps the approval date
    let status = lender.sanction_loan(1, &time)?;
    println!("loan 1 is {}", status);
    println!(
        "available: {}, pending: {}",
        lender.available_funds(),
        lender.pending_funds()
    );

    // the applicant takes the loan; funds are disbursed
    lender.loan_accepted(true, 1, &time)?;

    // print the loan snapshot
    let loan = lender.get_loan(1).expect("registered above");
    println!(
        "{}",
        serde_json::to_string_pretty(&mortgage_lender_rs::LoanView::from_loan(loan))?
    );

    Ok(())
}
