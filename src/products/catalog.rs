//! Loan product definitions including rate tiers, fees, and eligibility limits

use crate::loan::{LoanPurpose, LoanTerms};
use crate::simulation::LoanQuote;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Annual rate tiers keyed by loan duration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSchedule {
    /// (max duration in months inclusive, annual rate percent), ascending
    tiers: Vec<(u32, f64)>,
}

impl RateSchedule {
    pub fn from_tiers(tiers: &[(u32, f64)]) -> Self {
        Self {
            tiers: tiers.to_vec(),
        }
    }

    /// Get the annual rate (percent) for a given duration
    ///
    /// Durations beyond the last tier take the last tier's rate.
    pub fn rate_for(&self, duration_months: u32) -> f64 {
        for (max_months, rate) in &self.tiers {
            if duration_months <= *max_months {
                return *rate;
            }
        }
        self.tiers.last().map(|(_, rate)| *rate).unwrap_or(0.0)
    }

    pub fn max_duration_months(&self) -> u32 {
        self.tiers.last().map(|(months, _)| *months).unwrap_or(0)
    }
}

/// A loan product offered by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanProduct {
    pub name: String,
    pub purpose: LoanPurpose,
    pub rates: RateSchedule,
    /// Annual borrower insurance rate (percent of initial principal)
    pub insurance_rate_pct: f64,
    /// One-time application fee
    pub application_fee: f64,
    /// Maximum debt ratio for eligibility (percent)
    pub max_debt_ratio: f64,
    pub min_principal: f64,
    pub max_principal: f64,
    pub min_duration_months: u32,
}

impl LoanProduct {
    /// Annual rate (percent) for a requested duration
    pub fn annual_rate_for(&self, duration_months: u32) -> f64 {
        self.rates.rate_for(duration_months)
    }

    /// Whether requested terms fall inside this product's limits
    pub fn accepts(&self, principal: f64, duration_months: u32) -> bool {
        principal >= self.min_principal
            && principal <= self.max_principal
            && duration_months >= self.min_duration_months
            && duration_months <= self.rates.max_duration_months()
    }

    /// Terms this product would quote for a requested principal and duration
    pub fn terms_for(&self, principal: f64, duration_months: u32) -> LoanTerms {
        LoanTerms {
            principal,
            annual_rate_pct: self.annual_rate_for(duration_months),
            duration_months,
            insurance_rate_pct: self.insurance_rate_pct,
            application_fee: self.application_fee,
        }
    }
}

/// In-memory catalog of the platform's loan products
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: HashMap<LoanPurpose, LoanProduct>,
}

impl ProductCatalog {
    /// Build the standard product grid used for pricing
    pub fn standard() -> Self {
        let mut products = HashMap::new();

        products.insert(
            LoanPurpose::Personal,
            LoanProduct {
                name: "Personal Loan".to_string(),
                purpose: LoanPurpose::Personal,
                rates: RateSchedule::from_tiers(&[(12, 2.9), (36, 3.9), (60, 4.9), (84, 5.9)]),
                insurance_rate_pct: 0.36,
                application_fee: 150.0,
                max_debt_ratio: 35.0,
                min_principal: 1_000.0,
                max_principal: 75_000.0,
                min_duration_months: 6,
            },
        );

        products.insert(
            LoanPurpose::Auto,
            LoanProduct {
                name: "Auto Loan".to_string(),
                purpose: LoanPurpose::Auto,
                rates: RateSchedule::from_tiers(&[(24, 3.2), (48, 4.2), (72, 5.2)]),
                insurance_rate_pct: 0.30,
                application_fee: 200.0,
                max_debt_ratio: 35.0,
                min_principal: 3_000.0,
                max_principal: 100_000.0,
                min_duration_months: 12,
            },
        );

        products.insert(
            LoanPurpose::Home,
            LoanProduct {
                name: "Home Loan".to_string(),
                purpose: LoanPurpose::Home,
                rates: RateSchedule::from_tiers(&[(120, 2.5), (180, 2.9), (240, 3.3), (300, 3.6)]),
                insurance_rate_pct: 0.25,
                application_fee: 800.0,
                max_debt_ratio: 35.0,
                min_principal: 50_000.0,
                max_principal: 1_500_000.0,
                min_duration_months: 60,
            },
        );

        products.insert(
            LoanPurpose::Works,
            LoanProduct {
                name: "Home Improvement Loan".to_string(),
                purpose: LoanPurpose::Works,
                rates: RateSchedule::from_tiers(&[(36, 3.4), (84, 4.4), (120, 5.0)]),
                insurance_rate_pct: 0.32,
                application_fee: 180.0,
                max_debt_ratio: 35.0,
                min_principal: 2_000.0,
                max_principal: 150_000.0,
                min_duration_months: 12,
            },
        );

        products.insert(
            LoanPurpose::Professional,
            LoanProduct {
                name: "Professional Equipment Loan".to_string(),
                purpose: LoanPurpose::Professional,
                rates: RateSchedule::from_tiers(&[(24, 3.8), (60, 4.6), (84, 5.4)]),
                insurance_rate_pct: 0.40,
                application_fee: 300.0,
                max_debt_ratio: 35.0,
                min_principal: 5_000.0,
                max_principal: 500_000.0,
                min_duration_months: 12,
            },
        );

        Self { products }
    }

    pub fn product_for(&self, purpose: LoanPurpose) -> Option<&LoanProduct> {
        self.products.get(&purpose)
    }

    /// All products that accept the requested principal and duration
    pub fn accepting(&self, principal: f64, duration_months: u32) -> Vec<&LoanProduct> {
        let mut matches: Vec<&LoanProduct> = self
            .products
            .values()
            .filter(|p| p.accepts(principal, duration_months))
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches
    }

    /// Accepting product with the lowest all-in quoted cost
    ///
    /// Ties break by name so the selection is deterministic.
    pub fn best_offer(&self, principal: f64, duration_months: u32) -> Option<&LoanProduct> {
        self.products
            .values()
            .filter(|p| p.accepts(principal, duration_months))
            .min_by(|a, b| {
                let cost_a = LoanQuote::for_terms(&a.terms_for(principal, duration_months)).total_cost;
                let cost_b = LoanQuote::for_terms(&b.terms_for(principal, duration_months)).total_cost;
                cost_a
                    .partial_cmp(&cost_b)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.name.cmp(&b.name))
            })
    }

    pub fn products(&self) -> impl Iterator<Item = &LoanProduct> {
        self.products.values()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_schedule_tier_lookup() {
        let rates = RateSchedule::from_tiers(&[(12, 2.9), (36, 3.9), (60, 4.9)]);
        assert_eq!(rates.rate_for(6), 2.9);
        assert_eq!(rates.rate_for(12), 2.9);
        assert_eq!(rates.rate_for(13), 3.9);
        assert_eq!(rates.rate_for(60), 4.9);
        // Beyond the grid takes the last tier rate
        assert_eq!(rates.rate_for(120), 4.9);
    }

    #[test]
    fn test_product_limits() {
        let catalog = ProductCatalog::standard();
        let personal = catalog.product_for(LoanPurpose::Personal).unwrap();
        assert!(personal.accepts(10_000.0, 24));
        assert!(!personal.accepts(500.0, 24));
        assert!(!personal.accepts(10_000.0, 120));
    }

    #[test]
    fn test_best_offer_minimizes_total_cost() {
        let catalog = ProductCatalog::standard();
        let best = catalog.best_offer(10_000.0, 24).unwrap();
        // At 10k over 24 months the Auto tier (3.2%, $200 fee) undercuts
        // Personal (3.9%), Works (3.4%), and Professional (3.8%)
        assert_eq!(best.purpose, LoanPurpose::Auto);

        let best_cost = LoanQuote::for_terms(&best.terms_for(10_000.0, 24)).total_cost;
        for product in catalog.accepting(10_000.0, 24) {
            let cost = LoanQuote::for_terms(&product.terms_for(10_000.0, 24)).total_cost;
            assert!(best_cost <= cost);
        }
    }

    #[test]
    fn test_best_offer_none_when_nothing_accepts() {
        let catalog = ProductCatalog::standard();
        assert!(catalog.best_offer(100.0, 3).is_none());
    }

    #[test]
    fn test_accepting_filters_catalog() {
        let catalog = ProductCatalog::standard();
        let offers = catalog.accepting(10_000.0, 24);
        assert!(offers.iter().any(|p| p.purpose == LoanPurpose::Personal));
        // Home loans start at 50k principal
        assert!(!offers.iter().any(|p| p.purpose == LoanPurpose::Home));
    }
}
