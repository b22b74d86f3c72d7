//! Closed-form amortization math
//!
//! These functions carry the numeric contract of the origination platform's
//! quoting layer: degenerate inputs return 0 rather than raising an error,
//! and currency results are rounded to cents at each published step. NaN or
//! infinite inputs propagate to the caller, which is expected to have run
//! form-level validation already.

/// Default maximum debt ratio used by eligibility checks (percent)
pub const DEFAULT_MAX_DEBT_RATIO: f64 = 35.0;

/// Round a currency amount to cents
///
/// Half-cent values round away from zero (`f64::round` semantics).
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate the fixed monthly payment for a loan
///
/// Uses the standard annuity formula. A zero annual rate degenerates to
/// straight-line repayment. Non-positive principal or zero duration returns
/// 0 rather than an error.
///
/// # Arguments
/// * `principal` - Amount borrowed
/// * `annual_rate_pct` - Nominal annual rate as a percentage (e.g., 3.0 for 3%)
/// * `duration_months` - Number of monthly payments
pub fn calculate_monthly_payment(principal: f64, annual_rate_pct: f64, duration_months: u32) -> f64 {
    if principal <= 0.0 || duration_months == 0 {
        return 0.0;
    }

    if annual_rate_pct == 0.0 {
        return round_to_cents(principal / duration_months as f64);
    }

    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powi(duration_months as i32);
    let payment = principal * monthly_rate * growth / (growth - 1.0);

    round_to_cents(payment)
}

/// Calculate total interest paid over the life of the loan
///
/// `monthly_payment * duration_months - principal`, rounded to cents. Can be
/// negative if the caller supplies a payment that underpays the principal;
/// this is not validated here.
pub fn calculate_total_interest(principal: f64, monthly_payment: f64, duration_months: u32) -> f64 {
    let total_paid = monthly_payment * duration_months as f64;
    round_to_cents(total_paid - principal)
}

/// Calculate the all-in cost of the loan
///
/// Pure sum of already-rounded components; no rounding applied here.
pub fn calculate_total_cost(principal: f64, total_interest: f64, fees: f64, insurance_cost: f64) -> f64 {
    principal + total_interest + fees + insurance_cost
}

/// Calculate total borrower insurance cost over the loan term
///
/// Monthly insurance is `principal * rate / 100 / 12` (flat on initial
/// principal, not the declining balance).
pub fn calculate_insurance_cost(principal: f64, insurance_rate_pct: f64, duration_months: u32) -> f64 {
    let monthly_insurance = (principal * insurance_rate_pct / 100.0) / 12.0;
    round_to_cents(monthly_insurance * duration_months as f64)
}

/// Calculate a borrower's debt ratio as a percentage
///
/// Non-positive income returns 0 (ratio not computable) rather than dividing
/// by zero.
pub fn calculate_debt_ratio(monthly_payment: f64, monthly_income: f64) -> f64 {
    if monthly_income <= 0.0 {
        return 0.0;
    }
    round_to_cents((monthly_payment / monthly_income) * 100.0)
}

/// Check debt ratio against a maximum threshold, boundary inclusive
pub fn is_eligible_for_loan(debt_ratio: f64, max_debt_ratio: f64) -> bool {
    debt_ratio <= max_debt_ratio
}
