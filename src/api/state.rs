//! Application state for the payroll calendar API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calendar::CalendarSliceProvider;
use crate::config::{ConfigLoader, PayrollPolicy};

/// Shared application state.
///
/// Holds the loaded configuration and the calendar slice provider, whose
/// cache lives as long as the process.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// Source of month slices.
    provider: CalendarSliceProvider,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, provider: CalendarSliceProvider) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }

    /// Returns the payroll policy constants.
    pub fn policy(&self) -> &PayrollPolicy {
        self.config.policy()
    }

    /// Returns the calendar slice provider.
    pub fn provider(&self) -> &CalendarSliceProvider {
        &self.provider
    }
}
