//! Error types for the payroll calendar engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while fetching calendars and
//! computing payroll.

use thiserror::Error;

/// The main error type for the payroll calendar engine.
///
/// Division by zero workdays and a missing next-month slice are not errors:
/// they resolve to `0` and an absent rest date respectively.
///
/// # Example
///
/// ```
/// use payroll_calendar::error::EngineError;
///
/// let error = EngineError::CalendarUnavailable {
///     year: 2024,
///     message: "empty response".to_string(),
/// };
/// assert_eq!(error.to_string(), "Calendar unavailable for year 2024: empty response");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The remote source returned no usable calendar for the requested year.
    #[error("Calendar unavailable for year {year}: {message}")]
    CalendarUnavailable {
        /// The year that was requested.
        year: i32,
        /// A description of what went wrong.
        message: String,
    },

    /// The calendar cache backend failed.
    ///
    /// Recovered locally by the slice provider; never returned to callers of
    /// the provider.
    #[error("Calendar cache unavailable: {message}")]
    CacheUnavailable {
        /// A description of the cache failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A request parameter was out of range.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
