//! Compare catalog products side by side for one requested loan
//!
//! Usage: cargo run --bin compare_offers -- <principal> <months>

use anyhow::Context;
use loan_engine::products::ProductCatalog;
use loan_engine::simulation::LoanQuote;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let principal: f64 = args
        .next()
        .unwrap_or_else(|| "10000".to_string())
        .parse()
        .context("principal must be a number")?;
    let duration_months: u32 = args
        .next()
        .unwrap_or_else(|| "24".to_string())
        .parse()
        .context("months must be an integer")?;

    let catalog = ProductCatalog::standard();
    let offers = catalog.accepting(principal, duration_months);

    println!("\n{}", "=".repeat(78));
    println!("Offers for ${:.2} over {} months", principal, duration_months);
    println!("{}", "=".repeat(78));

    if offers.is_empty() {
        println!("No product accepts these terms.");
        return Ok(());
    }

    println!(
        "{:<30} {:>6} {:>10} {:>10} {:>10} {:>8}",
        "Product", "Rate", "Payment", "Interest", "Total", "APR"
    );
    println!("{}", "-".repeat(78));

    for product in offers {
        let terms = product.terms_for(principal, duration_months);
        let quote = LoanQuote::for_terms(&terms);

        println!(
            "{:<30} {:>5.2}% {:>10.2} {:>10.2} {:>10.2} {:>7}",
            product.name,
            terms.annual_rate_pct,
            quote.monthly_payment,
            quote.total_interest,
            quote.total_cost,
            quote
                .apr
                .map(|apr| format!("{:.2}%", apr * 100.0))
                .unwrap_or_else(|| "n/a".to_string()),
        );
    }

    if let Some(best) = catalog.best_offer(principal, duration_months) {
        println!("{}", "-".repeat(78));
        println!("Best offer: {}", best.name);
    }

    Ok(())
}
