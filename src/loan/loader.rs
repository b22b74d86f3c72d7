//! Load loan applications from CSV exports of the origination database

use super::{ApplicationStatus, LoanApplication, LoanPurpose, LoanTerms};
use csv::Reader;
use std::path::Path;
use thiserror::Error;

/// Errors raised while parsing an application export
#[derive(Debug, Error)]
pub enum LoanDataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown Purpose: {0}")]
    UnknownPurpose(String),

    #[error("Unknown Status: {0}")]
    UnknownStatus(String),
}

/// Raw CSV row matching the applications export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ApplicationID")]
    application_id: u32,
    #[serde(rename = "Purpose")]
    purpose: String,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_pct: f64,
    #[serde(rename = "DurationMonths")]
    duration_months: u32,
    #[serde(rename = "InsuranceRatePct")]
    insurance_rate_pct: f64,
    #[serde(rename = "ApplicationFee")]
    application_fee: f64,
    #[serde(rename = "MonthlyIncome")]
    monthly_income: f64,
    #[serde(rename = "ExistingMonthlyDebt")]
    existing_monthly_debt: f64,
    #[serde(rename = "Status")]
    status: String,
}

impl CsvRow {
    fn to_application(self) -> Result<LoanApplication, LoanDataError> {
        let purpose = LoanPurpose::from_label(&self.purpose)
            .ok_or_else(|| LoanDataError::UnknownPurpose(self.purpose.clone()))?;

        let status = ApplicationStatus::from_label(&self.status)
            .ok_or_else(|| LoanDataError::UnknownStatus(self.status.clone()))?;

        Ok(LoanApplication {
            application_id: self.application_id,
            purpose,
            terms: LoanTerms {
                principal: self.principal,
                annual_rate_pct: self.annual_rate_pct,
                duration_months: self.duration_months,
                insurance_rate_pct: self.insurance_rate_pct,
                application_fee: self.application_fee,
            },
            monthly_income: self.monthly_income,
            existing_monthly_debt: self.existing_monthly_debt,
            status,
        })
    }
}

/// Load all applications from a CSV file
pub fn load_applications<P: AsRef<Path>>(path: P) -> Result<Vec<LoanApplication>, LoanDataError> {
    let mut reader = Reader::from_path(path)?;
    let mut applications = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        applications.push(row.to_application()?);
    }

    log::info!("Loaded {} applications", applications.len());
    Ok(applications)
}

/// Load applications from the default applications.csv location
pub fn load_default_applications() -> Result<Vec<LoanApplication>, LoanDataError> {
    load_applications("applications.csv")
}

/// Load applications from any reader (e.g., string buffer, network stream)
pub fn load_applications_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<LoanApplication>, LoanDataError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut applications = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        applications.push(row.to_application()?);
    }

    Ok(applications)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
ApplicationID,Purpose,Principal,AnnualRatePct,DurationMonths,InsuranceRatePct,ApplicationFee,MonthlyIncome,ExistingMonthlyDebt,Status
101,Personal,10000,3.0,24,0.36,150,3000,0,Submitted
102,Auto,25000,4.2,60,0.30,200,4200,350,UnderReview
";

    #[test]
    fn test_load_applications_from_reader() {
        let apps = load_applications_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(apps.len(), 2);

        let a1 = &apps[0];
        assert_eq!(a1.application_id, 101);
        assert_eq!(a1.purpose, LoanPurpose::Personal);
        assert_eq!(a1.terms.principal, 10000.0);
        assert_eq!(a1.terms.duration_months, 24);
        assert_eq!(a1.status, ApplicationStatus::Submitted);

        let a2 = &apps[1];
        assert_eq!(a2.purpose, LoanPurpose::Auto);
        assert_eq!(a2.existing_monthly_debt, 350.0);
    }

    #[test]
    fn test_load_default_applications() {
        let apps = load_default_applications().expect("Failed to load applications");
        assert_eq!(apps.len(), 8);

        // Check first application
        let a1 = &apps[0];
        assert_eq!(a1.application_id, 1001);
        assert_eq!(a1.purpose, LoanPurpose::Personal);

        // Check application 1005 (index 4)
        let a5 = &apps[4];
        assert_eq!(a5.application_id, 1005);
        assert_eq!(a5.purpose, LoanPurpose::Home);
        assert_eq!(a5.terms.duration_months, 240);
    }

    #[test]
    fn test_unknown_purpose_is_error() {
        let bad = "\
ApplicationID,Purpose,Principal,AnnualRatePct,DurationMonths,InsuranceRatePct,ApplicationFee,MonthlyIncome,ExistingMonthlyDebt,Status
103,Boat,9000,5.0,36,0.3,0,2500,0,Submitted
";
        let err = load_applications_from_reader(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, LoanDataError::UnknownPurpose(ref s) if s == "Boat"));
    }
}
