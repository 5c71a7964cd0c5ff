//! Day-off calendar models.
//!
//! This module contains the [`YearCalendar`] bit sequence published by the
//! calendar source, the per-month [`MonthSlice`] views cut from it, and the
//! ordered [`YearSlices`] sequence handed to the payroll calculator.

use serde::{Deserialize, Serialize};

use crate::calendar::{days_in_month, days_in_year};
use crate::error::{EngineError, EngineResult};

/// Marker for a working day.
pub const WORKDAY: char = '0';
/// Marker for a weekend or public holiday.
pub const DAY_OFF: char = '1';

/// A validated year of day-off markers, one character per day starting January 1.
///
/// # Example
///
/// ```
/// use payroll_calendar::models::YearCalendar;
///
/// let raw = "0".repeat(365);
/// let calendar = YearCalendar::parse(2023, &raw).unwrap();
/// assert_eq!(calendar.len(), 365);
///
/// assert!(YearCalendar::parse(2024, &raw).is_err()); // leap year needs 366
/// assert!(YearCalendar::parse(2023, "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCalendar {
    year: i32,
    days: String,
}

impl YearCalendar {
    /// Validates a raw calendar body for `year`.
    ///
    /// Fails with [`EngineError::CalendarUnavailable`] when the body is empty,
    /// contains anything other than `0`/`1`, or does not cover every day of
    /// the year.
    pub fn parse(year: i32, raw: &str) -> EngineResult<Self> {
        let unavailable = |message: String| EngineError::CalendarUnavailable { year, message };

        if raw.is_empty() {
            return Err(unavailable("empty response".to_string()));
        }

        if let Some(bad) = raw.chars().find(|c| *c != WORKDAY && *c != DAY_OFF) {
            return Err(unavailable(format!("unexpected day marker {:?}", bad)));
        }

        let expected = days_in_year(year);
        if raw.len() != expected {
            return Err(unavailable(format!(
                "expected {} day markers, got {}",
                expected,
                raw.len()
            )));
        }

        Ok(Self {
            year,
            days: raw.to_string(),
        })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The raw marker string.
    pub fn as_str(&self) -> &str {
        &self.days
    }

    /// Number of days in the calendar (365 or 366).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false` for a validated calendar.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// The day-off markers for calendar days 1..N of one month.
///
/// A slice has no identity of its own; the caller supplies the month and
/// year it belongs to. Characters other than `0` and `1` count toward
/// [`MonthSlice::len`] but neither toward workdays nor days off.
///
/// # Example
///
/// ```
/// use payroll_calendar::models::MonthSlice;
///
/// let slice = MonthSlice::new("0110");
/// assert_eq!(slice.len(), 4);
/// assert_eq!(slice.workdays(), 2);
/// assert_eq!(slice.days_off(), 2);
/// assert_eq!(slice.last_workday_within(3), Some(0));
/// assert_eq!(slice.last_workday_within(4), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthSlice(String);

impl MonthSlice {
    /// Wraps a marker string.
    pub fn new(days: impl Into<String>) -> Self {
        Self(days.into())
    }

    /// The raw marker string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of calendar days in the slice.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns `true` when the slice holds no days.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `days` markers, or the whole slice when shorter.
    pub fn prefix(&self, days: usize) -> &str {
        match self.0.char_indices().nth(days) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }

    /// Count of workday markers.
    pub fn workdays(&self) -> usize {
        count_marker(&self.0, WORKDAY)
    }

    /// Count of day-off markers.
    pub fn days_off(&self) -> usize {
        count_marker(&self.0, DAY_OFF)
    }

    /// Count of workday markers among the first `days` days.
    pub fn workdays_within(&self, days: usize) -> usize {
        count_marker(self.prefix(days), WORKDAY)
    }

    /// Zero-based index of the last workday among the first `days` days.
    pub fn last_workday_within(&self, days: usize) -> Option<usize> {
        self.prefix(days)
            .chars()
            .enumerate()
            .filter(|(_, c)| *c == WORKDAY)
            .map(|(index, _)| index)
            .last()
    }
}

fn count_marker(days: &str, marker: char) -> usize {
    days.chars().filter(|c| *c == marker).count()
}

/// Ordered month slices for one year.
///
/// Holds exactly twelve slices, plus the following year's January when the
/// lookahead fetch succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSlices {
    year: i32,
    months: Vec<MonthSlice>,
    next_january: Option<MonthSlice>,
}

impl YearSlices {
    /// Cuts a validated calendar into its twelve months.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_calendar::models::{YearCalendar, YearSlices};
    ///
    /// let calendar = YearCalendar::parse(2024, &"0".repeat(366)).unwrap();
    /// let slices = YearSlices::from_calendar(&calendar);
    /// assert_eq!(slices.month(2).unwrap().len(), 29);
    /// assert_eq!(slices.len(), 12);
    /// ```
    pub fn from_calendar(calendar: &YearCalendar) -> Self {
        let year = calendar.year();
        let days = calendar.as_str();
        let mut months = Vec::with_capacity(12);
        let mut offset = 0;

        for month in 1..=12 {
            let count = days_in_month(year, month) as usize;
            months.push(MonthSlice::new(&days[offset..offset + count]));
            offset += count;
        }

        Self {
            year,
            months,
            next_january: None,
        }
    }

    /// Attaches the following year's January slice.
    pub fn with_next_january(mut self, slice: MonthSlice) -> Self {
        self.next_january = Some(slice);
        self
    }

    /// The calendar year of the twelve months.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The twelve slices of this year, January first.
    pub fn months(&self) -> &[MonthSlice] {
        &self.months
    }

    /// The slice for `month` (1-12) of this year.
    pub fn month(&self, month: u32) -> Option<&MonthSlice> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.months.get(index)
    }

    /// The slice following `month`: February for January, next January for December.
    pub fn following(&self, month: u32) -> Option<&MonthSlice> {
        if month == 12 {
            self.next_january.as_ref()
        } else {
            self.month(month.checked_add(1)?)
        }
    }

    /// The following year's January slice, when known.
    pub fn next_january(&self) -> Option<&MonthSlice> {
        self.next_january.as_ref()
    }

    /// Iterates all slices in order, ending with next January when present.
    pub fn iter(&self) -> impl Iterator<Item = &MonthSlice> {
        self.months.iter().chain(self.next_january.iter())
    }

    /// Number of slices: 12, or 13 with next January.
    pub fn len(&self) -> usize {
        self.months.len() + usize::from(self.next_january.is_some())
    }

    /// Always `false`; a year has twelve months.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}
