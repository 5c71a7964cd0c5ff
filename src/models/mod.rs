//! Core data models for the payroll calendar engine.
//!
//! This module contains the day-off calendar types and the payroll results
//! derived from them.

mod calendar;
mod payroll_month;

pub use calendar::{DAY_OFF, MonthSlice, WORKDAY, YearCalendar, YearSlices};
pub use payroll_month::{Payment, PayrollMonth, YearPayroll};
