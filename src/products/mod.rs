//! Loan product catalog and rate schedules

mod catalog;

pub use catalog::{LoanProduct, ProductCatalog, RateSchedule};
