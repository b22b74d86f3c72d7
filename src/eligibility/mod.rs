//! Borrower affordability and eligibility checks

mod evaluator;

pub use evaluator::{evaluate, EligibilityDecision, EligibilityInput};

// The debt-ratio primitives live with the amortization math; they are part
// of this module's surface as well
pub use crate::simulation::calculator::{
    calculate_debt_ratio, is_eligible_for_loan, DEFAULT_MAX_DEBT_RATIO,
};
