//! Scenario runner for batch quoting and rate sensitivity
//!
//! Pre-loads the product catalog once, then quotes many applications or
//! term variations without rebuilding it.

use crate::eligibility::{evaluate, EligibilityDecision, EligibilityInput};
use crate::loan::{LoanApplication, LoanPurpose, LoanTerms};
use crate::products::ProductCatalog;
use crate::simulation::{LoanQuote, DEFAULT_MAX_DEBT_RATIO};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Quote and decision for one application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResult {
    pub application_id: u32,
    /// Whether the catalog carries a product accepting these terms
    pub product_available: bool,
    pub quote: LoanQuote,
    pub decision: EligibilityDecision,
}

/// Pre-loaded runner for batch quoting
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    catalog: ProductCatalog,
}

impl ScenarioRunner {
    /// Create runner with the standard in-memory catalog
    pub fn new() -> Self {
        Self {
            catalog: ProductCatalog::standard(),
        }
    }

    /// Create runner with a pre-built catalog
    pub fn with_catalog(catalog: ProductCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Quote a single application against its purpose's product
    ///
    /// The product supplies the rate, insurance rate, fee, and debt-ratio
    /// threshold; the application's requested rate fields are overridden.
    /// When no product accepts the terms, the application's own terms are
    /// quoted as-is against the default threshold.
    pub fn quote(&self, application: &LoanApplication) -> ApplicationResult {
        let product = self
            .catalog
            .product_for(application.purpose)
            .filter(|p| p.accepts(application.terms.principal, application.terms.duration_months));

        let (terms, max_debt_ratio) = match product {
            Some(p) => (
                p.terms_for(application.terms.principal, application.terms.duration_months),
                p.max_debt_ratio,
            ),
            None => (application.terms, DEFAULT_MAX_DEBT_RATIO),
        };

        let quote = LoanQuote::for_terms(&terms);
        let input = EligibilityInput::new(application.monthly_income, application.existing_monthly_debt);
        let decision = evaluate(quote.monthly_outlay(), &input, max_debt_ratio);

        ApplicationResult {
            application_id: application.application_id,
            product_available: product.is_some(),
            quote,
            decision,
        }
    }

    /// Quote a batch of applications in parallel
    pub fn quote_batch(&self, applications: &[LoanApplication]) -> Vec<ApplicationResult> {
        applications
            .par_iter()
            .map(|application| self.quote(application))
            .collect()
    }

    /// Quote the same principal across a set of durations
    ///
    /// Used for duration-sensitivity tables in the quoting UI; each duration
    /// picks up its tier rate from the product for `purpose`.
    pub fn duration_sweep(&self, purpose: LoanPurpose, principal: f64, durations: &[u32]) -> Vec<LoanQuote> {
        durations
            .iter()
            .map(|&months| {
                let terms = match self.catalog.product_for(purpose) {
                    Some(p) => p.terms_for(principal, months),
                    None => LoanTerms::new(principal, 0.0, months),
                };
                LoanQuote::for_terms(&terms)
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_application(id: u32, income: f64) -> LoanApplication {
        LoanApplication::new(
            id,
            LoanPurpose::Personal,
            LoanTerms::new(10_000.0, 0.0, 24),
            income,
            0.0,
        )
    }

    #[test]
    fn test_quote_uses_product_rate() {
        let runner = ScenarioRunner::new();
        let result = runner.quote(&sample_application(1, 3000.0));
        assert!(result.product_available);
        // Personal 24-month tier is 3.9%, not the application's 0%
        assert_eq!(result.quote.terms.annual_rate_pct, 3.9);
        assert_eq!(result.quote.terms.application_fee, 150.0);
    }

    #[test]
    fn test_quote_without_matching_product() {
        let runner = ScenarioRunner::new();
        let mut application = sample_application(2, 3000.0);
        application.terms.principal = 500.0; // below Personal minimum
        let result = runner.quote(&application);
        assert!(!result.product_available);
        assert_eq!(result.quote.terms.annual_rate_pct, 0.0);
    }

    #[test]
    fn test_batch_matches_single_quotes() {
        let runner = ScenarioRunner::new();
        let applications: Vec<LoanApplication> = (1..=20)
            .map(|id| sample_application(id, 2500.0 + id as f64 * 100.0))
            .collect();

        let batch = runner.quote_batch(&applications);
        assert_eq!(batch.len(), 20);
        for (application, result) in applications.iter().zip(&batch) {
            let single = runner.quote(application);
            assert_eq!(result.application_id, application.application_id);
            assert_eq!(result.quote.monthly_payment, single.quote.monthly_payment);
            assert_eq!(result.decision.eligible, single.decision.eligible);
        }
    }

    #[test]
    fn test_duration_sweep_rates_step_with_tiers() {
        let runner = ScenarioRunner::new();
        let quotes = runner.duration_sweep(LoanPurpose::Personal, 10_000.0, &[12, 24, 48]);
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].terms.annual_rate_pct, 2.9);
        assert_eq!(quotes[1].terms.annual_rate_pct, 3.9);
        assert_eq!(quotes[2].terms.annual_rate_pct, 4.9);
        // Longer terms lower the payment
        assert!(quotes[2].monthly_payment < quotes[0].monthly_payment);
    }
}
