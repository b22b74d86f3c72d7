//! Loan Engine - Amortization and eligibility calculations for loan origination
//!
//! This library provides:
//! - Closed-form amortization math (monthly payment, interest, insurance)
//! - Month-by-month payment schedule generation with CSV export
//! - Effective APR via IRR over borrower cashflows
//! - Debt-ratio eligibility evaluation
//! - Product catalogs with duration-tiered rates
//! - Batch quoting over application files

pub mod eligibility;
pub mod loan;
pub mod products;
pub mod scenario;
pub mod simulation;

// Re-export commonly used types
pub use eligibility::{EligibilityDecision, EligibilityInput};
pub use loan::{LoanApplication, LoanPurpose, LoanTerms};
pub use products::{LoanProduct, ProductCatalog};
pub use scenario::ScenarioRunner;
pub use simulation::{AmortizationSchedule, LoanQuote};
