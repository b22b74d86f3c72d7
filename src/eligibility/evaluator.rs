//! Affordability evaluation combining a quoted payment with borrower finances

use crate::simulation::calculator::{calculate_debt_ratio, is_eligible_for_loan};
use serde::{Deserialize, Serialize};

/// Borrower finances relevant to the affordability gate
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EligibilityInput {
    /// Declared net monthly income
    pub monthly_income: f64,
    /// Monthly payments on existing debts
    pub existing_monthly_debt: f64,
}

impl EligibilityInput {
    pub fn new(monthly_income: f64, existing_monthly_debt: f64) -> Self {
        Self {
            monthly_income,
            existing_monthly_debt,
        }
    }
}

/// Outcome of an affordability evaluation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EligibilityDecision {
    /// Debt ratio including the new payment (percent, 2dp)
    pub debt_ratio: f64,
    /// Debt ratio from existing debts alone (percent, 2dp)
    pub existing_debt_ratio: f64,
    /// Threshold applied (percent)
    pub max_debt_ratio: f64,
    pub eligible: bool,
}

/// Evaluate affordability of a new monthly outlay
///
/// The new payment is added to the borrower's existing monthly debt before
/// computing the ratio. Non-positive income yields a 0 ratio (not
/// computable), which passes the threshold check; rejecting unverifiable
/// income is a review-queue concern, not a calculation one.
pub fn evaluate(monthly_outlay: f64, input: &EligibilityInput, max_debt_ratio: f64) -> EligibilityDecision {
    let combined = monthly_outlay + input.existing_monthly_debt;
    let debt_ratio = calculate_debt_ratio(combined, input.monthly_income);
    let existing_debt_ratio = calculate_debt_ratio(input.existing_monthly_debt, input.monthly_income);

    EligibilityDecision {
        debt_ratio,
        existing_debt_ratio,
        max_debt_ratio,
        eligible: is_eligible_for_loan(debt_ratio, max_debt_ratio),
    }
}
