//! Date helpers
//!
//! All date parsing happens at the API handler layer; the repository
//! only sees typed `NaiveDate` values.

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Parse a joining month (YYYY-MM-DD or YYYY-MM)
///
/// `YYYY-MM` resolves to the first day of that month; the day
/// component is never significant for PF accrual.
pub fn parse_joining_month(value: &str) -> AppResult<NaiveDate> {
    if let Ok(date) = parse_date(value) {
        return Ok(date);
    }
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid joining month: {}", value)))
}
