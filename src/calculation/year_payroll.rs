//! Payroll for all twelve months of a year.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calendar::CalendarSliceProvider;
use crate::config::PayrollPolicy;
use crate::error::EngineResult;
use crate::models::{PayrollMonth, YearPayroll, YearSlices};

use super::month_payroll::compute_month_payroll;

/// Computes payroll for months 1-12 from already sliced calendar data.
///
/// Each month is paired with the slice that follows it; December uses next
/// January when the slices carry it and otherwise has no rest date.
///
/// # Example
///
/// ```
/// use payroll_calendar::calculation::compute_year_payroll;
/// use payroll_calendar::config::PayrollPolicy;
/// use payroll_calendar::models::{YearCalendar, YearSlices};
/// use rust_decimal::Decimal;
///
/// let calendar = YearCalendar::parse(2023, &"0".repeat(365)).unwrap();
/// let slices = YearSlices::from_calendar(&calendar);
/// let months = compute_year_payroll(&slices, Decimal::new(30000, 0), &PayrollPolicy::default()).unwrap();
///
/// assert_eq!(months.len(), 12);
/// assert!(months[10].rest_date.is_some());
/// assert!(months[11].rest_date.is_none());
/// ```
pub fn compute_year_payroll(
    slices: &YearSlices,
    salary: Decimal,
    policy: &PayrollPolicy,
) -> EngineResult<Vec<PayrollMonth>> {
    slices
        .months()
        .iter()
        .zip(1u32..)
        .map(|(slice, month)| {
            compute_month_payroll(
                slice,
                slices.following(month),
                month,
                slices.year(),
                salary,
                policy,
            )
        })
        .collect()
}

/// Fetches the calendar for `year` and computes its payroll.
///
/// A `year` of `0` means the current year; the result carries the year that
/// was actually used. Calendar failures abort the whole year; no partial list
/// is returned.
pub async fn fetch_year_payroll(
    provider: &CalendarSliceProvider,
    year: i32,
    salary: Decimal,
    policy: &PayrollPolicy,
) -> EngineResult<YearPayroll> {
    let slices = provider.get_year_slices(year).await?;
    let months = compute_year_payroll(&slices, salary, policy)?;
    debug!(year = slices.year(), months = months.len(), "Computed year payroll");

    Ok(YearPayroll {
        year: slices.year(),
        salary,
        months,
    })
}
