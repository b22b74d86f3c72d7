//! Amortization math, payment schedules, and loan quoting

pub mod apr;
pub mod calculator;
mod quote;
mod schedule;

pub use apr::{calculate_apr, calculate_irr};
pub use calculator::{
    calculate_debt_ratio, calculate_insurance_cost, calculate_monthly_payment,
    calculate_total_cost, calculate_total_interest, is_eligible_for_loan, round_to_cents,
    DEFAULT_MAX_DEBT_RATIO,
};
pub use quote::LoanQuote;
pub use schedule::{build_schedule, AmortizationSchedule, ScheduleRow};
