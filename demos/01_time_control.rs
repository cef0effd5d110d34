/// time control - deterministic expiration with controlled time
use chrono::{Duration, TimeZone, Utc};
use mortgage_lender_rs::{Applicant, Lender, LoanStatus, Money, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== time control example ===\n");

    // create controlled time for testing
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    println!("starting date: {}", time.now().format("%Y-%m-%d"));

    // the pool is short: the first sanction goes on hold
    let mut lender = Lender::with_funds(Money::from_major(100_000))?;
    let applicant = Applicant::new(
        21,
        700,
        Money::from_major(100_000),
        Money::from_major(125_000),
    );
    lender.register_loan(1, applicant)?;

    let status = lender.sanction_loan(1, &time)?;
    println!("loan 1 after first sanction: {}", status);

    // a deposit covers the offer; re-sanction approves and reserves
    lender.deposit(Money::from_major(25_000), &time)?;
    let status = lender.sanction_loan(1, &time)?;
    println!("loan 1 after deposit and re-sanction: {}", status);
    println!(
        "available: {}, pending: {}",
        lender.available_funds(),
        lender.pending_funds()
    );

    // four days pass without a decision
    controller.advance(Duration::days(4));
    println!("\nadvanced to: {}", time.now().format("%Y-%m-%d"));

    let expired = lender.check_expired_loans(&time);
    println!("expired loans: {:?}", expired);
    println!(
        "available: {}, pending: {}",
        lender.available_funds(),
        lender.pending_funds()
    );

    for view in lender.filter_loans_by_status(LoanStatus::Expired) {
        println!(
            "loan {} approved on {:?} is now expired",
            view.loan_number, view.approved_date
        );
    }

    Ok(())
}
