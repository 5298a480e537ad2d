//! Explicit time-to-live cache cell.
//!
//! Holds one value together with the instant it was fetched. Expiry is
//! checked against a caller-supplied `now`, so the owner decides the clock
//! and there is no process-wide state.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TtlCache<T> {
    value: Option<T>,
    fetched_at: Option<Instant>,
    ttl: Duration,
}

impl<T: Clone> TtlCache<T> {
    /// Create an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            value: None,
            fetched_at: None,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether a value is present and younger than the TTL at `now`.
    pub fn is_fresh(&self, now: Instant) -> bool {
        match self.fetched_at {
            Some(at) if self.value.is_some() => now.saturating_duration_since(at) < self.ttl,
            _ => false,
        }
    }

    /// The cached value if still fresh at `now`.
    pub fn get(&self, now: Instant) -> Option<T> {
        if self.is_fresh(now) {
            self.value.clone()
        } else {
            None
        }
    }

    /// Store a value fetched at `now`.
    pub fn set(&mut self, value: T, now: Instant) {
        self.value = Some(value);
        self.fetched_at = Some(now);
    }

    /// Drop the cached value.
    pub fn invalidate(&mut self) {
        self.value = None;
        self.fetched_at = None;
    }

    /// Return the fresh value, or run `fetch`, store its result, and return it.
    pub fn get_or_try_fetch<E, F>(&mut self, now: Instant, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(v) = self.get(now) {
            return Ok(v);
        }
        let fresh = fetch()?;
        self.set(fresh.clone(), now);
        Ok(fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cache_is_stale() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(10));
        assert!(!cache.is_fresh(Instant::now()));
        assert_eq!(cache.get(Instant::now()), None);
    }

    #[test]
    fn value_expires_after_ttl() {
        let start = Instant::now();
        let mut cache = TtlCache::new(Duration::from_secs(10));
        cache.set(7u32, start);

        assert_eq!(cache.get(start + Duration::from_secs(9)), Some(7));
        assert_eq!(cache.get(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn invalidate_clears_value() {
        let now = Instant::now();
        let mut cache = TtlCache::new(Duration::from_secs(60));
        cache.set("catalog".to_string(), now);
        cache.invalidate();
        assert!(!cache.is_fresh(now));
    }

    #[test]
    fn fetch_runs_only_when_stale() {
        let start = Instant::now();
        let mut cache = TtlCache::new(Duration::from_secs(5));
        let mut calls = 0;

        let v: Result<u32, ()> = cache.get_or_try_fetch(start, || {
            calls += 1;
            Ok(1)
        });
        assert_eq!(v, Ok(1));

        let v: Result<u32, ()> = cache.get_or_try_fetch(start + Duration::from_secs(1), || {
            calls += 1;
            Ok(2)
        });
        assert_eq!(v, Ok(1));

        let v: Result<u32, ()> = cache.get_or_try_fetch(start + Duration::from_secs(6), || {
            calls += 1;
            Ok(3)
        });
        assert_eq!(v, Ok(3));
        assert_eq!(calls, 2);
    }

    #[test]
    fn failed_fetch_keeps_cache_empty() {
        let now = Instant::now();
        let mut cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(5));
        let r: Result<u32, &str> = cache.get_or_try_fetch(now, || Err("db down"));
        assert_eq!(r, Err("db down"));
        assert!(!cache.is_fresh(now));
    }
}
