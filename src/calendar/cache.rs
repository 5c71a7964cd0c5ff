//! Year-keyed cache for raw calendar strings.
//!
//! A cache only changes how often the remote source is hit, never the
//! computed results. Backend failures surface as
//! [`EngineError::CacheUnavailable`] and are recovered by the provider.
//!
//! [`EngineError::CacheUnavailable`]: crate::error::EngineError::CacheUnavailable

use moka::sync::Cache;

use crate::error::EngineResult;

/// Key/value storage for validated year calendars.
pub trait CalendarCache: Send + Sync {
    /// Looks up the calendar string for `year`.
    fn get(&self, year: i32) -> EngineResult<Option<String>>;

    /// Stores the calendar string for `year`.
    fn set(&self, year: i32, value: &str) -> EngineResult<()>;
}

/// A cache that never holds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl CalendarCache for NoCache {
    fn get(&self, _year: i32) -> EngineResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _year: i32, _value: &str) -> EngineResult<()> {
        Ok(())
    }
}

/// Bounded in-process cache, alive for the lifetime of the process.
///
/// # Example
///
/// ```
/// use payroll_calendar::calendar::{CalendarCache, MemoryCache};
///
/// let cache = MemoryCache::new(4);
/// cache.set(2024, "0110").unwrap();
/// assert_eq!(cache.get(2024).unwrap().as_deref(), Some("0110"));
/// assert_eq!(cache.get(2025).unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryCache {
    years: Cache<i32, String>,
}

impl MemoryCache {
    /// Creates a cache holding at most `capacity` years.
    pub fn new(capacity: u64) -> Self {
        Self {
            years: Cache::new(capacity),
        }
    }
}

impl CalendarCache for MemoryCache {
    fn get(&self, year: i32) -> EngineResult<Option<String>> {
        Ok(self.years.get(&year))
    }

    fn set(&self, year: i32, value: &str) -> EngineResult<()> {
        self.years.insert(year, value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cache_always_misses() {
        let cache = NoCache;
        cache.set(2024, "0").unwrap();
        assert_eq!(cache.get(2024).unwrap(), None);
    }

    #[test]
    fn test_memory_cache_overwrites_year() {
        let cache = MemoryCache::new(2);
        cache.set(2024, "00").unwrap();
        cache.set(2024, "11").unwrap();
        assert_eq!(cache.get(2024).unwrap().as_deref(), Some("11"));
    }

    #[test]
    fn test_memory_cache_keys_by_year() {
        let cache = MemoryCache::new(8);
        cache.set(2023, "0").unwrap();
        cache.set(2024, "1").unwrap();
        assert_eq!(cache.get(2023).unwrap().as_deref(), Some("0"));
        assert_eq!(cache.get(2024).unwrap().as_deref(), Some("1"));
    }
}
