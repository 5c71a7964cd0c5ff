//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field carries a
//! serde default, so an empty document yields [`AppConfig::default`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default number of leading calendar days that count toward the advance.
pub const DEFAULT_ADVANCE_WINDOW_DAYS: usize = 15;
/// Default latest day of the current month on which the advance is paid.
pub const DEFAULT_ADVANCE_PAY_DAY: usize = 25;
/// Default latest day of the next month on which the rest is paid.
pub const DEFAULT_REST_PAY_DAY: usize = 10;

/// Tunable payroll policy constants.
///
/// # Example
///
/// ```
/// use payroll_calendar::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// assert_eq!(policy.salary_multiplier, Decimal::ONE);
/// assert_eq!(policy.advance_window_days, 15);
/// assert_eq!(policy.advance_pay_day, 25);
/// assert_eq!(policy.rest_pay_day, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPolicy {
    /// Rate adjustment factor applied to the per-day salary.
    #[serde(default = "default_salary_multiplier")]
    pub salary_multiplier: Decimal,
    /// The first N calendar days of the month count toward the advance.
    #[serde(default = "default_advance_window_days")]
    pub advance_window_days: usize,
    /// Latest calendar day, within the current month, eligible for the advance payment.
    #[serde(default = "default_advance_pay_day")]
    pub advance_pay_day: usize,
    /// Latest calendar day, within the next month, eligible for the rest payment.
    #[serde(default = "default_rest_pay_day")]
    pub rest_pay_day: usize,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            salary_multiplier: default_salary_multiplier(),
            advance_window_days: DEFAULT_ADVANCE_WINDOW_DAYS,
            advance_pay_day: DEFAULT_ADVANCE_PAY_DAY,
            rest_pay_day: DEFAULT_REST_PAY_DAY,
        }
    }
}

fn default_salary_multiplier() -> Decimal {
    Decimal::ONE
}

fn default_advance_window_days() -> usize {
    DEFAULT_ADVANCE_WINDOW_DAYS
}

fn default_advance_pay_day() -> usize {
    DEFAULT_ADVANCE_PAY_DAY
}

fn default_rest_pay_day() -> usize {
    DEFAULT_REST_PAY_DAY
}

/// Settings for the remote day-off calendar source and its cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSourceConfig {
    /// Endpoint queried with `?year=YYYY[&month=M]`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Number of years kept in the in-memory cache. `0` disables caching.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

impl Default for CalendarSourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_base_url() -> String {
    "https://isdayoff.ru/api/getdata".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_capacity() -> u64 {
    16
}

/// HTTP server settings for the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Payroll policy constants.
    #[serde(default)]
    pub policy: PayrollPolicy,
    /// Remote calendar source settings.
    #[serde(default)]
    pub calendar: CalendarSourceConfig,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}
