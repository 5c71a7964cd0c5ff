//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, CalendarSourceConfig, PayrollPolicy, ServerConfig};

/// Loads and provides access to the application configuration.
///
/// # File Structure
///
/// ```text
/// policy:
///   salary_multiplier: "1"
///   advance_window_days: 15
///   advance_pay_day: 25
///   rest_pay_day: 10
/// calendar:
///   base_url: https://isdayoff.ru/api/getdata
///   timeout_secs: 10
///   cache_capacity: 16
/// server:
///   bind: 0.0.0.0:8000
///   log_level: info
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_calendar::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
/// println!("Advance paid by day {}", loader.policy().advance_pay_day);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or mistyped fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, path_str)
    }

    /// Parses configuration from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_calendar::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("policy:\n  rest_pay_day: 5\n")?;
    /// assert_eq!(loader.policy().rest_pay_day, 5);
    /// assert_eq!(loader.policy().advance_pay_day, 25);
    /// # Ok::<(), payroll_calendar::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> EngineResult<Self> {
        // serde_yaml rejects an empty document; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str::<AppConfig>(content).map_err(|e| {
            EngineError::ConfigParseError {
                path,
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the payroll policy constants.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.config.policy
    }

    /// Returns the remote calendar source settings.
    pub fn calendar(&self) -> &CalendarSourceConfig {
        &self.config.calendar
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }
}
