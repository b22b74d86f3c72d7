//! Month-by-month amortization schedule generation

use super::calculator::{calculate_monthly_payment, round_to_cents};
use crate::loan::LoanTerms;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A single row of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    /// Payment due date, when a first payment date was supplied
    pub due_date: Option<NaiveDate>,
    /// Outstanding principal at the beginning of the month
    pub bop_balance: f64,
    /// Interest portion of the payment
    pub interest: f64,
    /// Principal portion of the payment
    pub principal_paid: f64,
    /// Borrower insurance premium for the month
    pub insurance: f64,
    /// Total cash due (principal + interest + insurance)
    pub payment: f64,
    /// Outstanding principal at the end of the month
    pub eop_balance: f64,
}

/// Full amortization schedule plus its summary totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rows: Vec<ScheduleRow>,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_insurance: f64,
}

impl AmortizationSchedule {
    /// Write the schedule as CSV to any writer
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record([
            "Month",
            "DueDate",
            "BOP_Balance",
            "Interest",
            "Principal",
            "Insurance",
            "Payment",
            "EOP_Balance",
        ])?;

        for row in &self.rows {
            let due = row
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_default();
            csv_writer.write_record([
                row.month.to_string(),
                due,
                format!("{:.2}", row.bop_balance),
                format!("{:.2}", row.interest),
                format!("{:.2}", row.principal_paid),
                format!("{:.2}", row.insurance),
                format!("{:.2}", row.payment),
                format!("{:.2}", row.eop_balance),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Build the amortization schedule for a loan
///
/// The level payment comes from `calculate_monthly_payment`; each month's
/// interest accrues on the outstanding balance and is rounded to cents, with
/// the remainder of the payment retiring principal. The final month absorbs
/// the rounding residual so the ending balance is exactly zero.
///
/// Degenerate terms (non-positive principal, zero duration) produce an empty
/// schedule, consistent with the calculator's sentinel policy.
pub fn build_schedule(terms: &LoanTerms, first_payment_date: Option<NaiveDate>) -> AmortizationSchedule {
    if terms.principal <= 0.0 || terms.duration_months == 0 {
        return AmortizationSchedule {
            rows: Vec::new(),
            monthly_payment: 0.0,
            total_interest: 0.0,
            total_insurance: 0.0,
        };
    }

    let payment = calculate_monthly_payment(terms.principal, terms.annual_rate_pct, terms.duration_months);
    let monthly_rate = terms.annual_rate_pct / 100.0 / 12.0;
    let monthly_insurance = round_to_cents((terms.principal * terms.insurance_rate_pct / 100.0) / 12.0);

    let mut rows = Vec::with_capacity(terms.duration_months as usize);
    let mut balance = terms.principal;
    let mut total_interest = 0.0;

    for month in 1..=terms.duration_months {
        let interest = round_to_cents(balance * monthly_rate);
        let is_final = month == terms.duration_months;

        // Final month retires whatever balance remains, absorbing the
        // accumulated rounding drift of the level payment
        let principal_paid = if is_final {
            round_to_cents(balance)
        } else {
            round_to_cents(payment - interest)
        };

        let eop_balance = round_to_cents(balance - principal_paid);
        let cash_due = round_to_cents(principal_paid + interest + monthly_insurance);

        let due_date = first_payment_date.map(|d| add_months(d, month - 1));

        rows.push(ScheduleRow {
            month,
            due_date,
            bop_balance: balance,
            interest,
            principal_paid,
            insurance: monthly_insurance,
            payment: cash_due,
            eop_balance,
        });

        total_interest += interest;
        balance = eop_balance;
    }

    let total_insurance = round_to_cents(monthly_insurance * terms.duration_months as f64);

    AmortizationSchedule {
        rows,
        monthly_payment: payment,
        total_interest: round_to_cents(total_interest),
        total_insurance,
    }
}

/// Shift a date forward by whole months, clamping the day as chrono does
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn terms_10k_3pct_24m() -> LoanTerms {
        LoanTerms::new(10_000.0, 3.0, 24).with_insurance(0.36)
    }

    #[test]
    fn test_schedule_length_and_final_balance() {
        let schedule = build_schedule(&terms_10k_3pct_24m(), None);
        assert_eq!(schedule.rows.len(), 24);
        assert_eq!(schedule.rows.last().unwrap().eop_balance, 0.0);
    }

    #[test]
    fn test_first_month_split() {
        let schedule = build_schedule(&terms_10k_3pct_24m(), None);
        let first = &schedule.rows[0];
        // 10000 * 0.0025 = 25.00 interest, rest of 429.81 retires principal
        assert_abs_diff_eq!(first.interest, 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.principal_paid, 404.81, epsilon = 1e-9);
        assert_abs_diff_eq!(first.insurance, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_principal_portions_sum_to_principal() {
        let schedule = build_schedule(&terms_10k_3pct_24m(), None);
        let total_principal: f64 = schedule.rows.iter().map(|r| r.principal_paid).sum();
        assert_abs_diff_eq!(total_principal, 10_000.0, epsilon = 0.01);
    }

    #[test]
    fn test_schedule_interest_tracks_closed_form() {
        // Per-month rounding drifts from the closed-form total by at most
        // half a cent per month
        let schedule = build_schedule(&terms_10k_3pct_24m(), None);
        assert!((schedule.total_interest - 315.44).abs() < 0.24);
    }

    #[test]
    fn test_zero_rate_schedule() {
        let terms = LoanTerms::new(12_000.0, 0.0, 24);
        let schedule = build_schedule(&terms, None);
        assert_eq!(schedule.monthly_payment, 500.0);
        assert!(schedule.rows.iter().all(|r| r.interest == 0.0));
        assert_eq!(schedule.total_interest, 0.0);
        assert_eq!(schedule.rows.last().unwrap().eop_balance, 0.0);
    }

    #[test]
    fn test_degenerate_terms_empty_schedule() {
        let schedule = build_schedule(&LoanTerms::new(0.0, 3.0, 24), None);
        assert!(schedule.rows.is_empty());
        assert_eq!(schedule.monthly_payment, 0.0);
    }

    #[test]
    fn test_due_dates_advance_monthly() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let schedule = build_schedule(&terms_10k_3pct_24m(), Some(start));
        assert_eq!(schedule.rows[0].due_date, Some(start));
        // Chrono clamps Jan 31 + 1 month to Feb 28
        assert_eq!(
            schedule.rows[1].due_date,
            NaiveDate::from_ymd_opt(2026, 2, 28)
        );
    }

    #[test]
    fn test_csv_export_has_header_and_rows() {
        let schedule = build_schedule(&terms_10k_3pct_24m(), None);
        let mut buf = Vec::new();
        schedule.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Month,DueDate,BOP_Balance"));
        assert_eq!(text.lines().count(), 25);
    }
}
