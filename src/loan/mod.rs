//! Loan application data structures and CSV loading

mod data;
pub mod loader;

pub use data::{ApplicationStatus, LoanApplication, LoanPurpose, LoanTerms};
pub use loader::{
    load_applications, load_applications_from_reader, load_default_applications, LoanDataError,
};
