//! Loan Engine CLI
//!
//! Command-line interface for quoting loans, printing amortization
//! schedules, and batch-processing application exports.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use loan_engine::loan::{load_applications, LoanPurpose, LoanTerms};
use loan_engine::scenario::ScenarioRunner;
use loan_engine::simulation::{build_schedule, LoanQuote};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "loan_engine", version, about = "Loan quoting and amortization engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Quote a single loan and print its amortization schedule
    Quote {
        /// Amount borrowed
        #[arg(long)]
        principal: f64,
        /// Nominal annual rate in percent (e.g., 3.0)
        #[arg(long)]
        rate: f64,
        /// Duration in months
        #[arg(long)]
        months: u32,
        /// Borrower insurance rate in percent
        #[arg(long, default_value_t = 0.0)]
        insurance_rate: f64,
        /// One-time application fee
        #[arg(long, default_value_t = 0.0)]
        fee: f64,
        /// First payment date (YYYY-MM-DD) for due-date stamping
        #[arg(long)]
        first_payment: Option<NaiveDate>,
        /// Write the full schedule to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print the quote as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Quote every application in a CSV export and write a results CSV
    Batch {
        /// Applications CSV path
        input: PathBuf,
        /// Results CSV path
        #[arg(long, default_value = "quote_results.csv")]
        output: PathBuf,
    },
    /// Print quotes for one principal across a set of durations
    Sweep {
        /// Loan purpose (Personal, Auto, Home, Works, Professional)
        #[arg(long)]
        purpose: String,
        #[arg(long)]
        principal: f64,
        /// Durations in months
        #[arg(long, value_delimiter = ',', default_value = "12,24,36,48,60")]
        months: Vec<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Quote {
            principal,
            rate,
            months,
            insurance_rate,
            fee,
            first_payment,
            csv,
            json,
        } => {
            let terms = LoanTerms::new(principal, rate, months)
                .with_insurance(insurance_rate)
                .with_fee(fee);
            run_quote(&terms, first_payment, csv.as_deref(), json)
        }
        Command::Batch { input, output } => run_batch(&input, &output),
        Command::Sweep {
            purpose,
            principal,
            months,
        } => run_sweep(&purpose, principal, &months),
    }
}

fn run_quote(
    terms: &LoanTerms,
    first_payment: Option<NaiveDate>,
    csv: Option<&std::path::Path>,
    json: bool,
) -> anyhow::Result<()> {
    let quote = LoanQuote::for_terms(terms);

    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        if let Some(path) = csv {
            let file = File::create(path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
            build_schedule(terms, first_payment).write_csv(file)?;
        }
        return Ok(());
    }

    println!("Loan Quote");
    println!("==========");
    println!("  Principal:        ${:.2}", terms.principal);
    println!("  Annual rate:      {:.2}%", terms.annual_rate_pct);
    println!("  Duration:         {} months", terms.duration_months);
    println!("  Monthly payment:  ${:.2}", quote.monthly_payment);
    println!("  Monthly insurance: ${:.2}", quote.monthly_insurance);
    println!("  Total interest:   ${:.2}", quote.total_interest);
    println!("  Insurance cost:   ${:.2}", quote.insurance_cost);
    println!("  Total cost:       ${:.2}", quote.total_cost);
    match quote.apr {
        Some(apr) => println!("  Effective APR:    {:.3}%", apr * 100.0),
        None => println!("  Effective APR:    n/a"),
    }
    println!();

    let schedule = build_schedule(terms, first_payment);

    println!(
        "{:>5} {:>12} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "Month", "BOP Bal", "Interest", "Principal", "Insurance", "Payment", "EOP Bal"
    );
    println!("{}", "-".repeat(75));
    for row in schedule.rows.iter().take(12) {
        println!(
            "{:>5} {:>12.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12.2}",
            row.month, row.bop_balance, row.interest, row.principal_paid, row.insurance, row.payment, row.eop_balance
        );
    }
    if schedule.rows.len() > 12 {
        println!("... ({} more months)", schedule.rows.len() - 12);
    }

    if let Some(path) = csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        schedule.write_csv(file)?;
        println!("\nFull schedule written to {}", path.display());
    }

    Ok(())
}

fn run_batch(input: &std::path::Path, output: &std::path::Path) -> anyhow::Result<()> {
    let start = Instant::now();
    let applications = load_applications(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    println!("Loaded {} applications in {:?}", applications.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let quote_start = Instant::now();
    let results = runner.quote_batch(&applications);
    println!("Quoted {} applications in {:?}", results.len(), quote_start.elapsed());

    let mut file = File::create(output)
        .with_context(|| format!("Unable to create {}", output.display()))?;
    writeln!(
        file,
        "ApplicationID,ProductAvailable,MonthlyPayment,MonthlyInsurance,TotalInterest,TotalCost,APR,DebtRatio,Eligible"
    )?;
    for result in &results {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2},{},{:.2},{}",
            result.application_id,
            result.product_available,
            result.quote.monthly_payment,
            result.quote.monthly_insurance,
            result.quote.total_interest,
            result.quote.total_cost,
            result
                .quote
                .apr
                .map(|apr| format!("{:.5}", apr))
                .unwrap_or_default(),
            result.decision.debt_ratio,
            result.decision.eligible,
        )?;
    }

    let eligible = results.iter().filter(|r| r.decision.eligible).count();
    println!("Eligible: {} / {}", eligible, results.len());
    println!("Results written to {}", output.display());

    Ok(())
}

fn run_sweep(purpose: &str, principal: f64, months: &[u32]) -> anyhow::Result<()> {
    let purpose = LoanPurpose::from_label(purpose)
        .with_context(|| format!("Unknown purpose: {}", purpose))?;

    let runner = ScenarioRunner::new();
    let quotes = runner.duration_sweep(purpose, principal, months);

    println!(
        "{:>8} {:>8} {:>12} {:>12} {:>12}",
        "Months", "Rate", "Payment", "Interest", "Total Cost"
    );
    println!("{}", "-".repeat(58));
    for quote in &quotes {
        println!(
            "{:>8} {:>7.2}% {:>12.2} {:>12.2} {:>12.2}",
            quote.terms.duration_months,
            quote.terms.annual_rate_pct,
            quote.monthly_payment,
            quote.total_interest,
            quote.total_cost,
        );
    }

    Ok(())
}
