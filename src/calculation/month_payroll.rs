//! Advance and rest computation for a single month.
//!
//! The month's salary is split in two: the advance covers the workdays in the
//! first `advance_window_days` days and is paid on the last workday on or
//! before `advance_pay_day`; the rest is everything else and is paid on the
//! last workday on or before `rest_pay_day` of the following month.

use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::calendar::{first_of_month, resolve_year};
use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{MonthSlice, PayrollMonth};

/// Rounds an amount to a whole currency unit, halves away from zero.
///
/// # Example
///
/// ```
/// use payroll_calendar::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(375, 1)), Decimal::new(38, 0));
/// assert_eq!(round_money(Decimal::new(-375, 1)), Decimal::new(-38, 0));
/// assert_eq!(round_money(Decimal::new(3749, 2)), Decimal::new(37, 0));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Resolves the payment date for a month.
///
/// Scans the first `pay_day` days of `slice` for the last workday. Day `n` of
/// the slice maps to day `n` of `month`; when the window has no workday the
/// date is day 0 of `month`, i.e. the last day of the previous month.
/// `month` 13 means January of the next year.
///
/// # Example
///
/// ```
/// use payroll_calendar::calculation::payment_date;
/// use payroll_calendar::models::MonthSlice;
/// use chrono::NaiveDate;
///
/// // March 2024 starts on a Friday
/// let slice = MonthSlice::new("0110000011000001100000110000011");
/// assert_eq!(
///     payment_date(2024, 3, &slice, 25).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
/// );
/// // Days 23 and 24 fall on a weekend
/// assert_eq!(
///     payment_date(2024, 3, &slice, 24).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 22).unwrap()
/// );
///
/// let closed = MonthSlice::new("1".repeat(31));
/// assert_eq!(
///     payment_date(2024, 3, &closed, 25).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
/// );
/// ```
pub fn payment_date(
    year: i32,
    month: u32,
    slice: &MonthSlice,
    pay_day: usize,
) -> EngineResult<NaiveDate> {
    let out_of_range = || EngineError::InvalidRequest {
        field: "year".to_string(),
        message: format!("no calendar date for {}-{:02}", year, month),
    };

    let first = first_of_month(year, month).ok_or_else(out_of_range)?;

    let date = match slice.last_workday_within(pay_day) {
        Some(index) => first.checked_add_days(Days::new(index as u64)),
        None => first.pred_opt(),
    };

    date.ok_or_else(out_of_range)
}

/// Computes the payroll facts for one month.
///
/// # Arguments
///
/// * `slice` - The month's day-off markers
/// * `next_slice` - The following month's markers; without it the rest date is absent
/// * `month` - The month number (1-12)
/// * `year` - The calendar year, `0` for the current year
/// * `salary` - The monthly salary, must not be negative
/// * `policy` - Advance window and pay-day constants
///
/// # Returns
///
/// A [`PayrollMonth`] value, or `InvalidRequest` when the month is outside
/// 1-12, the salary is negative or too large to split, or the year has no
/// representable dates.
/// A month with no workdays is not an error: its per-day rate is zero.
///
/// # Example
///
/// ```
/// use payroll_calendar::calculation::compute_month_payroll;
/// use payroll_calendar::config::PayrollPolicy;
/// use payroll_calendar::models::MonthSlice;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let january = MonthSlice::new("0".repeat(31));
/// let result = compute_month_payroll(
///     &january,
///     None,
///     1,
///     2024,
///     Decimal::new(31000, 0),
///     &PayrollPolicy::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.salary_per_day, Decimal::new(1000, 0));
/// assert_eq!(result.advance_value, Decimal::new(15000, 0));
/// assert_eq!(result.rest_value, Decimal::new(16000, 0));
/// assert_eq!(result.advance_date, NaiveDate::from_ymd_opt(2024, 1, 25).unwrap());
/// assert_eq!(result.rest_date, None);
/// ```
pub fn compute_month_payroll(
    slice: &MonthSlice,
    next_slice: Option<&MonthSlice>,
    month: u32,
    year: i32,
    salary: Decimal,
    policy: &PayrollPolicy,
) -> EngineResult<PayrollMonth> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidRequest {
            field: "month".to_string(),
            message: format!("{} is not between 1 and 12", month),
        });
    }

    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(EngineError::InvalidRequest {
            field: "salary".to_string(),
            message: format!("{} must not be negative", salary),
        });
    }

    let year = resolve_year(year);
    let workdays = slice.workdays();
    let advance_workdays = slice.workdays_within(policy.advance_window_days);

    let too_large = || EngineError::InvalidRequest {
        field: "salary".to_string(),
        message: format!("{} is too large to split", salary),
    };

    let salary_per_day = if workdays == 0 {
        Decimal::ZERO
    } else {
        salary
            .checked_div(Decimal::from(workdays))
            .and_then(|rate| rate.checked_mul(policy.salary_multiplier))
            .map(round_money)
            .ok_or_else(too_large)?
    };
    let advance_value = salary_per_day
        .checked_mul(Decimal::from(advance_workdays))
        .map(round_money)
        .ok_or_else(too_large)?;
    let rest_value = salary.checked_sub(advance_value).ok_or_else(too_large)?;

    let advance_date = payment_date(year, month, slice, policy.advance_pay_day)?;
    let rest_date = next_slice
        .map(|next| payment_date(year, month + 1, next, policy.rest_pay_day))
        .transpose()?;

    Ok(PayrollMonth {
        year,
        month,
        salary,
        total_days: slice.len(),
        workdays,
        holidays: slice.days_off(),
        salary_per_day,
        advance_workdays,
        advance_value,
        advance_date,
        rest_value,
        rest_date,
        slice: slice.as_str().to_string(),
        advance_slice: slice.prefix(policy.advance_window_days).to_string(),
    })
}
