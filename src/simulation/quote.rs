//! Loan quote summary assembled from the calculator functions

use super::apr::calculate_apr;
use super::calculator::{
    calculate_insurance_cost, calculate_monthly_payment, calculate_total_cost,
    calculate_total_interest,
};
use crate::loan::LoanTerms;
use serde::{Deserialize, Serialize};

/// Summary figures quoted to a borrower for one set of terms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanQuote {
    pub terms: LoanTerms,
    /// Level monthly payment, excluding insurance
    pub monthly_payment: f64,
    /// Monthly insurance premium
    pub monthly_insurance: f64,
    pub total_interest: f64,
    pub insurance_cost: f64,
    /// Principal + interest + fees + insurance
    pub total_cost: f64,
    /// Effective APR including fees and insurance, when computable
    pub apr: Option<f64>,
}

impl LoanQuote {
    /// Quote a loan from its terms
    ///
    /// Degenerate terms produce a zeroed quote, consistent with the
    /// calculator's sentinel policy.
    pub fn for_terms(terms: &LoanTerms) -> Self {
        if terms.principal <= 0.0 || terms.duration_months == 0 {
            return Self {
                terms: *terms,
                monthly_payment: 0.0,
                monthly_insurance: 0.0,
                total_interest: 0.0,
                insurance_cost: 0.0,
                total_cost: 0.0,
                apr: None,
            };
        }

        let monthly_payment =
            calculate_monthly_payment(terms.principal, terms.annual_rate_pct, terms.duration_months);
        let total_interest =
            calculate_total_interest(terms.principal, monthly_payment, terms.duration_months);
        let insurance_cost =
            calculate_insurance_cost(terms.principal, terms.insurance_rate_pct, terms.duration_months);
        let monthly_insurance = insurance_cost / terms.duration_months as f64;
        let total_cost = calculate_total_cost(
            terms.principal,
            total_interest,
            terms.application_fee,
            insurance_cost,
        );

        Self {
            terms: *terms,
            monthly_payment,
            monthly_insurance,
            total_interest,
            insurance_cost,
            total_cost,
            apr: calculate_apr(terms),
        }
    }

    /// Total monthly outlay including insurance
    pub fn monthly_outlay(&self) -> f64 {
        self.monthly_payment + self.monthly_insurance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_quote_assembles_calculator_outputs() {
        let terms = LoanTerms::new(10_000.0, 3.0, 24)
            .with_insurance(0.36)
            .with_fee(150.0);
        let quote = LoanQuote::for_terms(&terms);

        assert_abs_diff_eq!(quote.monthly_payment, 429.81, epsilon = 1e-9);
        assert_abs_diff_eq!(quote.total_interest, 315.44, epsilon = 1e-9);
        assert_abs_diff_eq!(quote.insurance_cost, 72.0, epsilon = 1e-9);
        assert_abs_diff_eq!(quote.monthly_insurance, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(quote.total_cost, 10_537.44, epsilon = 1e-9);
        assert!(quote.apr.is_some());
    }

    #[test]
    fn test_degenerate_terms_zeroed_quote() {
        let quote = LoanQuote::for_terms(&LoanTerms::new(-1.0, 3.0, 24));
        assert_eq!(quote.monthly_payment, 0.0);
        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.total_cost, 0.0);
        assert!(quote.apr.is_none());
    }
}
