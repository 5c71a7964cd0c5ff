//! Configuration loading and management for the payroll calendar engine.
//!
//! This module loads payroll policy constants, remote calendar source settings
//! and HTTP server settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_calendar::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Calendar source: {}", config.calendar().base_url);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, CalendarSourceConfig, DEFAULT_ADVANCE_PAY_DAY, DEFAULT_ADVANCE_WINDOW_DAYS,
    DEFAULT_REST_PAY_DAY, PayrollPolicy, ServerConfig,
};
