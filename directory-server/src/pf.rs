//! Provident fund accrual
//!
//! PF accrues as a fixed percentage of salary for every full calendar
//! month worked. Months are counted on month boundaries across year
//! changes; the day component of the joining date is ignored.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Monthly contribution rate: 12% of salary
fn pf_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// Whole calendar months elapsed between the joining month and `today`.
///
/// Negative when the joining month lies in the future.
pub fn elapsed_months(joining_month: NaiveDate, today: NaiveDate) -> i64 {
    let years = i64::from(today.year() - joining_month.year());
    let months = i64::from(today.month() as i32 - joining_month.month() as i32);
    years * 12 + months
}

/// Total PF accrued up to `today`.
///
/// Zero until at least one full month has been worked.
pub fn total_pf(salary: Decimal, joining_month: NaiveDate, today: NaiveDate) -> Decimal {
    let months = elapsed_months(joining_month, today);
    if months > 0 {
        salary * pf_rate() * Decimal::from(months)
    } else {
        Decimal::ZERO
    }
}
