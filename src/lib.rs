//! Payroll calendar engine.
//!
//! This crate computes split salary disbursements ("advance" and "rest") and
//! the dates they are paid, using a published day-off calendar for the year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
