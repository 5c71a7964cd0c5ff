//! Remote day-off calendar source.
//!
//! The calendar is published as a plain text body of `0`/`1` markers, one per
//! day starting January 1, queried by year and optionally by month.

use std::time::Duration;

use tracing::debug;

use crate::config::CalendarSourceConfig;
use crate::error::{EngineError, EngineResult};

/// A request for one year, or one month of a year, of day-off markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarQuery {
    /// The four-digit year.
    pub year: i32,
    /// The month (1-12) when only one month is wanted.
    pub month: Option<u32>,
}

impl CalendarQuery {
    /// A whole-year query.
    pub fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    /// A single-month query.
    pub fn month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
        }
    }
}

/// A blocking source of day-off marker strings.
///
/// Implementations return the response body as-is (trimmed). An empty body
/// is a valid answer meaning "no data"; callers decide whether that is fatal.
pub trait CalendarSource: Send + Sync {
    /// Fetches the markers for `query`.
    fn fetch(&self, query: CalendarQuery) -> EngineResult<String>;
}

/// [`CalendarSource`] backed by an isdayoff-style HTTP endpoint.
///
/// Issues `GET {base_url}?year=YYYY[&month=M]`.
#[derive(Debug)]
pub struct IsDayOffSource {
    agent: ureq::Agent,
    base_url: String,
}

impl IsDayOffSource {
    /// Creates a source from configuration.
    pub fn new(config: &CalendarSourceConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();

        Self {
            agent,
            base_url: config.base_url.clone(),
        }
    }

    /// The endpoint this source queries.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CalendarSource for IsDayOffSource {
    fn fetch(&self, query: CalendarQuery) -> EngineResult<String> {
        let unavailable = |message: String| EngineError::CalendarUnavailable {
            year: query.year,
            message,
        };

        let mut request = self
            .agent
            .get(&self.base_url)
            .query("year", &format!("{:04}", query.year));
        if let Some(month) = query.month {
            request = request.query("month", &month.to_string());
        }

        debug!(url = %request.url(), "Requesting day-off calendar");

        let response = request.call().map_err(|err| match err {
            ureq::Error::Status(code, _) => unavailable(format!("remote returned status {}", code)),
            ureq::Error::Transport(transport) => unavailable(transport.to_string()),
        })?;

        let body = response
            .into_string()
            .map_err(|err| unavailable(format!("unreadable response body: {}", err)))?;

        Ok(body.trim().to_string())
    }
}
