//! Request types for the payroll calendar API.
//!
//! This module defines the path parameters of the `/api/:salary/:year`
//! endpoint and their validation.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Raw path parameters for the year payroll endpoint.
///
/// Kept as strings so that bad values produce a JSON validation error
/// instead of a bare path rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollPathParams {
    /// The monthly salary.
    pub salary: String,
    /// The four-digit year; absent for the current year.
    #[serde(default)]
    pub year: Option<String>,
}

/// A validated year payroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollRequest {
    /// The monthly salary, never negative.
    pub salary: Decimal,
    /// The requested year, `0` for the current year.
    pub year: i32,
}

impl TryFrom<PayrollPathParams> for PayrollRequest {
    type Error = EngineError;

    fn try_from(params: PayrollPathParams) -> EngineResult<Self> {
        let salary = Decimal::from_str(params.salary.trim()).map_err(|_| {
            EngineError::InvalidRequest {
                field: "salary".to_string(),
                message: format!("'{}' is not a number", params.salary),
            }
        })?;

        if salary.is_sign_negative() && !salary.is_zero() {
            return Err(EngineError::InvalidRequest {
                field: "salary".to_string(),
                message: format!("{} must not be negative", salary),
            });
        }

        let year = match params.year.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(raw) => parse_year(raw)?,
        };

        Ok(PayrollRequest { salary, year })
    }
}

fn parse_year(raw: &str) -> EngineResult<i32> {
    let invalid = || EngineError::InvalidRequest {
        field: "year".to_string(),
        message: format!("'{}' is not a year between 1 and 9999", raw),
    };

    let year = raw.parse::<i32>().map_err(|_| invalid())?;
    match year {
        0 => Ok(0),
        1..=9999 => Ok(year),
        _ => Err(invalid()),
    }
}
