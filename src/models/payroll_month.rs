//! Payroll month result models.
//!
//! This module contains the [`PayrollMonth`] value object produced by the
//! payroll calculator, the [`YearPayroll`] that groups twelve of them, and
//! the [`Payment`] view used when rendering it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payroll facts for one month, computed once from its day-off slice.
///
/// All derived values are fixed at construction; nothing is recomputed
/// lazily and nothing is mutated afterwards.
///
/// # Example
///
/// ```
/// use payroll_calendar::models::PayrollMonth;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let month = PayrollMonth {
///     year: 2024,
///     month: 3,
///     salary: Decimal::new(30000, 0),
///     total_days: 31,
///     workdays: 20,
///     holidays: 11,
///     salary_per_day: Decimal::new(1500, 0),
///     advance_workdays: 10,
///     advance_value: Decimal::new(15000, 0),
///     advance_date: NaiveDate::from_ymd_opt(2024, 3, 25).unwrap(),
///     rest_value: Decimal::new(15000, 0),
///     rest_date: Some(NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()),
///     slice: "0".repeat(31),
///     advance_slice: "0".repeat(15),
/// };
///
/// assert_eq!(month.advance_value + month.rest_value, month.salary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollMonth {
    /// The calendar year of the month.
    pub year: i32,
    /// The month number (1-12).
    pub month: u32,
    /// The monthly salary the split is computed for.
    pub salary: Decimal,
    /// Number of calendar days in the month.
    pub total_days: usize,
    /// Number of workdays in the month.
    pub workdays: usize,
    /// Number of days off (weekends and holidays) in the month.
    pub holidays: usize,
    /// Salary per workday, rounded to a whole currency unit.
    pub salary_per_day: Decimal,
    /// Workdays within the advance window.
    pub advance_workdays: usize,
    /// The first-half payment.
    pub advance_value: Decimal,
    /// Date the advance is paid.
    pub advance_date: NaiveDate,
    /// The second-half payment: salary minus advance.
    pub rest_value: Decimal,
    /// Date the rest is paid, absent when the next month's calendar is unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_date: Option<NaiveDate>,
    /// The month's day-off markers.
    pub slice: String,
    /// The markers inside the advance window.
    pub advance_slice: String,
}

impl PayrollMonth {
    /// The advance payment.
    pub fn advance(&self) -> Payment {
        Payment {
            value: self.advance_value,
            date: Some(self.advance_date),
        }
    }

    /// The rest payment.
    pub fn rest(&self) -> Payment {
        Payment {
            value: self.rest_value,
            date: self.rest_date,
        }
    }

    /// Both payments of the month in pay order.
    pub fn payments(&self) -> [Payment; 2] {
        [self.advance(), self.rest()]
    }
}

/// A single disbursement: an amount and the day it is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// The amount paid.
    pub value: Decimal,
    /// The payment date, if known.
    pub date: Option<NaiveDate>,
}

impl Payment {
    /// Checks whether the payment was made strictly before `today`.
    ///
    /// A payment with no known date is never past.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_calendar::models::Payment;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let payment = Payment {
    ///     value: Decimal::new(100, 0),
    ///     date: NaiveDate::from_ymd_opt(2024, 3, 25),
    /// };
    /// assert!(payment.is_past(NaiveDate::from_ymd_opt(2024, 3, 26).unwrap()));
    /// assert!(!payment.is_past(NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()));
    /// ```
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date.is_some_and(|date| date < today)
    }
}

/// Payroll for months 1-12 of one resolved year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPayroll {
    /// The resolved calendar year.
    pub year: i32,
    /// The monthly salary the payroll was computed for.
    pub salary: Decimal,
    /// One entry per month, January first.
    pub months: Vec<PayrollMonth>,
}
