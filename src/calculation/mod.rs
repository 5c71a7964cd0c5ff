//! Payroll calculation logic.
//!
//! This module turns month slices of the day-off calendar into payroll
//! facts: workday counts, the per-day rate, the advance and rest amounts, and
//! the dates each is paid.

mod month_payroll;
mod year_payroll;

pub use month_payroll::{compute_month_payroll, payment_date, round_money};
pub use year_payroll::{compute_year_payroll, fetch_year_payroll};
