//! Effective annual percentage rate (APR) calculation
//!
//! The APR is the internal rate of return of the borrower's cashflows
//! (principal received net of fees, then monthly payments out), annualized
//! by monthly compounding. Solved with Newton-Raphson and a bisection
//! fallback.

use crate::loan::LoanTerms;
use crate::simulation::calculator::{calculate_insurance_cost, calculate_monthly_payment};

/// Calculate the annualized IRR for a series of monthly cash flows
///
/// # Arguments
/// * `cashflows` - Cash flows at monthly intervals (positive = inflow to borrower)
///
/// # Returns
/// * `Option<f64>` - Annual rate as a decimal (e.g., 0.05 for 5%), or None if no solution found
pub fn calculate_irr(cashflows: &[f64]) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }

    if cashflows.iter().all(|&cf| cf.abs() < 1e-10) {
        return Some(0.0);
    }

    // At least one sign change is required for an IRR to exist
    let has_positive = cashflows.iter().any(|&cf| cf > 1e-10);
    let has_negative = cashflows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return None;
    }

    // Newton-Raphson iteration for the monthly rate
    let mut rate = 0.05 / 12.0;
    let tolerance = 1e-10;
    let max_iterations = 1000;

    for _ in 0..max_iterations {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);

        if dnpv.abs() < 1e-20 {
            return calculate_irr_bisection(cashflows);
        }

        let new_rate = (rate - npv / dnpv).clamp(-0.99, 10.0);

        if (new_rate - rate).abs() < tolerance {
            return Some(annualize(new_rate));
        }

        rate = new_rate;
    }

    calculate_irr_bisection(cashflows)
}

/// Effective APR of a loan, including fees and insurance
///
/// Returns None for degenerate terms (no payment) or a cashflow vector with
/// no root, e.g. fees exceeding the principal.
pub fn calculate_apr(terms: &LoanTerms) -> Option<f64> {
    let payment = calculate_monthly_payment(terms.principal, terms.annual_rate_pct, terms.duration_months);
    if payment <= 0.0 {
        return None;
    }

    let insurance_total = calculate_insurance_cost(terms.principal, terms.insurance_rate_pct, terms.duration_months);
    let monthly_insurance = insurance_total / terms.duration_months as f64;

    let mut cashflows = Vec::with_capacity(terms.duration_months as usize + 1);
    cashflows.push(terms.principal - terms.application_fee);
    for _ in 0..terms.duration_months {
        cashflows.push(-(payment + monthly_insurance));
    }

    calculate_irr(&cashflows)
}

/// Convert a monthly rate to an annual rate by compounding
fn annualize(monthly_rate: f64) -> f64 {
    (1.0 + monthly_rate).powi(12) - 1.0
}

/// Calculate NPV and its derivative with respect to rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        let discount = (1.0 + rate).powi(t as i32);
        npv += cf / discount;
        if t > 0 {
            dnpv -= (t as f64) * cf / ((1.0 + rate).powi(t as i32 + 1));
        }
    }

    (npv, dnpv)
}

/// Fallback IRR calculation using bisection
fn calculate_irr_bisection(cashflows: &[f64]) -> Option<f64> {
    let mut low = -0.99_f64;
    let mut high = 10.0_f64;
    let tolerance = 1e-10;
    let max_iterations = 1000;

    let npv_low = npv_at_rate(cashflows, low);
    let npv_high = npv_at_rate(cashflows, high);

    if npv_low * npv_high > 0.0 {
        return None;
    }

    for _ in 0..max_iterations {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at_rate(cashflows, mid);

        if npv_mid.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Some(annualize(mid));
        }

        if npv_mid * npv_at_rate(cashflows, low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    None
}

/// Calculate NPV at a given monthly rate
fn npv_at_rate(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}
