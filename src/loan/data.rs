//! Loan data structures matching the origination application export format

use serde::{Deserialize, Serialize};

/// Purpose of the loan, drives product selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanPurpose {
    /// Unsecured personal loan
    Personal,
    /// Vehicle financing
    Auto,
    /// Mortgage / home purchase
    Home,
    /// Home improvement works
    Works,
    /// Professional equipment financing
    Professional,
}

impl LoanPurpose {
    /// Parse from the string values used in application exports
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Personal" => Some(LoanPurpose::Personal),
            "Auto" => Some(LoanPurpose::Auto),
            "Home" => Some(LoanPurpose::Home),
            "Works" => Some(LoanPurpose::Works),
            "Professional" => Some(LoanPurpose::Professional),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoanPurpose::Personal => "Personal",
            LoanPurpose::Auto => "Auto",
            LoanPurpose::Home => "Home",
            LoanPurpose::Works => "Works",
            LoanPurpose::Professional => "Professional",
        }
    }
}

/// Workflow status of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    Funded,
}

impl ApplicationStatus {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Submitted" => Some(ApplicationStatus::Submitted),
            "UnderReview" => Some(ApplicationStatus::UnderReview),
            "Approved" => Some(ApplicationStatus::Approved),
            "Rejected" => Some(ApplicationStatus::Rejected),
            "Funded" => Some(ApplicationStatus::Funded),
            _ => None,
        }
    }

    /// Whether this application still needs a quote/eligibility pass
    pub fn is_open(&self) -> bool {
        matches!(self, ApplicationStatus::Submitted | ApplicationStatus::UnderReview)
    }
}

/// Financial terms of a loan
///
/// Pure value type; all amounts are in currency units, rates are percentages
/// (e.g., 3.0 = 3% annual).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: f64,
    /// Nominal annual interest rate (percent)
    pub annual_rate_pct: f64,
    /// Number of monthly payments
    pub duration_months: u32,
    /// Borrower insurance rate (percent of initial principal, annual)
    pub insurance_rate_pct: f64,
    /// One-time application fee, added to total cost
    pub application_fee: f64,
}

impl LoanTerms {
    /// Terms with no insurance and no fee
    pub fn new(principal: f64, annual_rate_pct: f64, duration_months: u32) -> Self {
        Self {
            principal,
            annual_rate_pct,
            duration_months,
            insurance_rate_pct: 0.0,
            application_fee: 0.0,
        }
    }

    pub fn with_insurance(mut self, insurance_rate_pct: f64) -> Self {
        self.insurance_rate_pct = insurance_rate_pct;
        self
    }

    pub fn with_fee(mut self, application_fee: f64) -> Self {
        self.application_fee = application_fee;
        self
    }
}

/// A loan application as submitted by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanApplication {
    pub application_id: u32,
    pub purpose: LoanPurpose,
    pub terms: LoanTerms,
    /// Borrower's declared net monthly income
    pub monthly_income: f64,
    /// Monthly payments on the borrower's existing debts
    pub existing_monthly_debt: f64,
    pub status: ApplicationStatus,
}

impl LoanApplication {
    pub fn new(
        application_id: u32,
        purpose: LoanPurpose,
        terms: LoanTerms,
        monthly_income: f64,
        existing_monthly_debt: f64,
    ) -> Self {
        Self {
            application_id,
            purpose,
            terms,
            monthly_income,
            existing_monthly_debt,
            status: ApplicationStatus::Submitted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_labels_round_trip() {
        for purpose in [
            LoanPurpose::Personal,
            LoanPurpose::Auto,
            LoanPurpose::Home,
            LoanPurpose::Works,
            LoanPurpose::Professional,
        ] {
            assert_eq!(LoanPurpose::from_label(purpose.label()), Some(purpose));
        }
        assert_eq!(LoanPurpose::from_label("Boat"), None);
    }

    #[test]
    fn test_status_open_states() {
        assert!(ApplicationStatus::Submitted.is_open());
        assert!(ApplicationStatus::UnderReview.is_open());
        assert!(!ApplicationStatus::Rejected.is_open());
        assert!(!ApplicationStatus::Funded.is_open());
    }

    #[test]
    fn test_terms_builders() {
        let terms = LoanTerms::new(10000.0, 3.0, 24)
            .with_insurance(0.36)
            .with_fee(150.0);
        assert_eq!(terms.insurance_rate_pct, 0.36);
        assert_eq!(terms.application_fee, 150.0);
    }
}
