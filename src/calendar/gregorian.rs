//! Proleptic Gregorian day counts.

use chrono::{Datelike, Local, NaiveDate};

/// Checks whether `year` is a Gregorian leap year.
///
/// # Example
///
/// ```
/// use payroll_calendar::calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`, or `0` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Number of days in `year`.
pub fn days_in_year(year: i32) -> usize {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Resolves an unset year (`0`) to the current local year.
pub fn resolve_year(year: i32) -> i32 {
    if year == 0 { Local::now().year() } else { year }
}

/// The first day of `month` in `year`, rolling month 13 into the next January.
pub(crate) fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 13 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month, 1)
    }
}
