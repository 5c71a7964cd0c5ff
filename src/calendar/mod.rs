//! Day-off calendar retrieval and slicing.
//!
//! This module fetches a year's day-off markers from a [`CalendarSource`],
//! keeps them in a [`CalendarCache`], and cuts them into month slices with
//! [`CalendarSliceProvider`].

mod cache;
mod gregorian;
mod provider;
mod source;

pub use cache::{CalendarCache, MemoryCache, NoCache};
pub use gregorian::{days_in_month, days_in_year, is_leap_year, resolve_year};
pub(crate) use gregorian::first_of_month;
pub use provider::CalendarSliceProvider;
pub use source::{CalendarQuery, CalendarSource, IsDayOffSource};
