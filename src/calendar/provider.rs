//! Year calendar retrieval and month slicing.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::calendar::{
    CalendarCache, CalendarQuery, CalendarSource, NoCache, days_in_month, resolve_year,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{DAY_OFF, MonthSlice, WORKDAY, YearCalendar, YearSlices};

/// Produces the ordered month slices for a year.
///
/// The year calendar is read through the cache and fetched remotely on a
/// miss. Next year's January is always fetched remotely, concurrently with
/// the year, so December's rest date can be resolved.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use payroll_calendar::calendar::{CalendarQuery, CalendarSliceProvider, CalendarSource, MemoryCache};
/// use payroll_calendar::error::EngineResult;
///
/// struct Weekdays;
///
/// impl CalendarSource for Weekdays {
///     fn fetch(&self, query: CalendarQuery) -> EngineResult<String> {
///         let days = match query.month { Some(_) => 31, None => 365 };
///         Ok("0000011".chars().cycle().take(days).collect())
///     }
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let provider = CalendarSliceProvider::new(Arc::new(Weekdays))
///     .with_cache(Arc::new(MemoryCache::new(4)));
/// let slices = provider.get_year_slices(2023).await.unwrap();
/// assert_eq!(slices.len(), 13);
/// # });
/// ```
#[derive(Clone)]
pub struct CalendarSliceProvider {
    source: Arc<dyn CalendarSource>,
    cache: Arc<dyn CalendarCache>,
}

impl CalendarSliceProvider {
    /// Creates a provider with no cache.
    pub fn new(source: Arc<dyn CalendarSource>) -> Self {
        Self {
            source,
            cache: Arc::new(NoCache),
        }
    }

    /// Replaces the cache.
    pub fn with_cache(mut self, cache: Arc<dyn CalendarCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Returns the twelve month slices of `year`, plus next January when available.
    ///
    /// A `year` of `0` means the current year.
    ///
    /// # Errors
    ///
    /// [`EngineError::CalendarUnavailable`] when the year calendar cannot be
    /// obtained or is malformed. A failed next-January lookahead is not an
    /// error; the result simply has no 13th slice.
    pub async fn get_year_slices(&self, year: i32) -> EngineResult<YearSlices> {
        let year = resolve_year(year);

        let (calendar, next_january) =
            tokio::join!(self.load_year(year), self.load_next_january(year));

        let slices = YearSlices::from_calendar(&calendar?);
        debug!(year, slices = slices.len(), "Sliced year calendar");

        Ok(match next_january {
            Some(january) => slices.with_next_january(january),
            None => slices,
        })
    }

    async fn load_year(&self, year: i32) -> EngineResult<YearCalendar> {
        match self.cache.get(year) {
            Ok(Some(raw)) => match YearCalendar::parse(year, &raw) {
                Ok(calendar) => {
                    info!(year, source = "cache", "Loaded year calendar");
                    return Ok(calendar);
                }
                Err(err) => warn!(year, error = %err, "Discarding invalid cached calendar"),
            },
            Ok(None) => {}
            Err(err) => warn!(year, error = %err, "Calendar cache read failed"),
        }

        let raw = self.fetch(CalendarQuery::year(year)).await?;
        let calendar = YearCalendar::parse(year, &raw)?;
        info!(year, source = "remote", "Loaded year calendar");

        if let Err(err) = self.cache.set(year, calendar.as_str()) {
            warn!(year, error = %err, "Calendar cache write failed");
        }

        Ok(calendar)
    }

    async fn load_next_january(&self, year: i32) -> Option<MonthSlice> {
        let next_year = year.checked_add(1)?;

        let raw = match self.fetch(CalendarQuery::month(next_year, 1)).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(year = next_year, error = %err, "Next January lookahead failed");
                return None;
            }
        };

        if raw.is_empty() {
            warn!(year = next_year, "Next January lookahead returned no data");
            return None;
        }

        let valid = raw.len() == days_in_month(next_year, 1) as usize
            && raw.chars().all(|c| c == WORKDAY || c == DAY_OFF);
        if !valid {
            warn!(year = next_year, body = %raw, "Next January lookahead is malformed");
            return None;
        }

        Some(MonthSlice::new(raw))
    }

    async fn fetch(&self, query: CalendarQuery) -> EngineResult<String> {
        let source = Arc::clone(&self.source);

        tokio::task::spawn_blocking(move || source.fetch(query))
            .await
            .map_err(|err| EngineError::CalendarUnavailable {
                year: query.year,
                message: format!("fetch task failed: {}", err),
            })?
    }
}

impl std::fmt::Debug for CalendarSliceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarSliceProvider").finish_non_exhaustive()
    }
}
