//! Client-side query cache: keyed, type-erased, with stale and GC windows.
//!
//! Timestamps are milliseconds from any monotonic-enough clock; the browser
//! side feeds it `Date.now()`.

use std::{any::Any, collections::HashMap, fmt, rc::Rc};

use crate::error::ApiError;

/// Data is served from cache without refetching for this long.
pub const DEFAULT_STALE_TIME_MS: u64 = 5 * 60 * 1000;
/// Entries nobody asked for in this long are dropped.
pub const DEFAULT_GC_TIME_MS: u64 = 10 * 60 * 1000;
/// Retries after the first failure.
pub const DEFAULT_RETRY: u32 = 2;
/// Upper bound on the backoff between attempts.
pub const MAX_RETRY_DELAY_MS: u64 = 30_000;

/// Ordered key segments, e.g. `["article", "my-slug"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    /// Key from its segments, outermost first.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Key segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether `prefix` names this key or one of its ancestors.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Per-query behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// How long a cached answer counts as fresh.
    pub stale_time_ms: u64,
    /// Attempts after the first failure; non-retryable errors skip them.
    pub retry: u32,
    /// Disabled queries never fetch; the hook stays idle.
    pub enabled: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time_ms: DEFAULT_STALE_TIME_MS,
            retry: DEFAULT_RETRY,
            enabled: true,
        }
    }
}

impl QueryOptions {
    /// Override the stale window.
    pub fn stale_time(mut self, ms: u64) -> Self {
        self.stale_time_ms = ms;
        self
    }

    /// Override the retry count.
    pub fn retry(mut self, retry: u32) -> Self {
        self.retry = retry;
        self
    }

    /// Enable or disable fetching.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Backoff before retry number `attempt` (0-based): doubles from one second,
/// capped at thirty.
pub fn retry_delay_ms(attempt: u32) -> u64 {
    let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
    factor.saturating_mul(1000).min(MAX_RETRY_DELAY_MS)
}

/// Whether to try again after `failures` consecutive failures.
pub fn should_retry(failures: u32, options: &QueryOptions, err: &ApiError) -> bool {
    err.is_retryable() && failures <= options.retry
}

/// Result of a cache lookup.
#[derive(Debug)]
pub enum Cached<T> {
    /// Within the stale window; no fetch needed.
    Fresh(Rc<T>),
    /// Usable, but a background refetch is due.
    Stale(Rc<T>),
    /// Nothing cached under the key.
    Missing,
}

impl<T> Cached<T> {
    /// Cached value, fresh or stale.
    pub fn data(&self) -> Option<Rc<T>> {
        match self {
            Self::Fresh(data) | Self::Stale(data) => Some(Rc::clone(data)),
            Self::Missing => None,
        }
    }

    /// Anything but a fresh hit triggers a fetch.
    pub fn needs_fetch(&self) -> bool {
        !matches!(self, Self::Fresh(_))
    }
}

struct Entry {
    value: Rc<dyn Any>,
    updated_at: u64,
    last_used: u64,
    invalidated: bool,
}

/// Cache of decoded responses shared by every query in the app.
pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
    gc_time_ms: u64,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_GC_TIME_MS)
    }
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.entries.len())
            .field("gc_time_ms", &self.gc_time_ms)
            .finish()
    }
}

impl QueryCache {
    /// Empty cache evicting entries unused for `gc_time_ms`.
    pub fn new(gc_time_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            gc_time_ms,
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key` as a `T`. An entry stored under a different type is
    /// treated as missing.
    pub fn lookup<T: 'static>(&mut self, key: &QueryKey, stale_time_ms: u64, now: u64) -> Cached<T> {
        let Some(entry) = self.entries.get_mut(key) else {
            return Cached::Missing;
        };
        let Ok(value) = Rc::clone(&entry.value).downcast::<T>() else {
            log::warn!("query {key}: cached value has an unexpected type");
            return Cached::Missing;
        };
        entry.last_used = now;
        let age = now.saturating_sub(entry.updated_at);
        if entry.invalidated || age >= stale_time_ms {
            Cached::Stale(value)
        } else {
            Cached::Fresh(value)
        }
    }

    /// Store a fresh answer for `key`, replacing any previous one.
    pub fn insert<T: 'static>(&mut self, key: QueryKey, value: Rc<T>, now: u64) {
        self.entries.insert(key, Entry {
            value,
            updated_at: now,
            last_used: now,
            invalidated: false,
        });
    }

    /// Mark one entry stale so the next lookup refetches.
    pub fn invalidate(&mut self, key: &QueryKey) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.invalidated = true;
                true
            },
            None => false,
        }
    }

    /// Mark every entry under `prefix` stale; returns how many matched.
    pub fn invalidate_prefix(&mut self, prefix: &QueryKey) -> usize {
        let mut count = 0;
        for (key, entry) in &mut self.entries {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                count += 1;
            }
        }
        count
    }

    /// Forget `key`; returns whether it was cached.
    pub fn remove(&mut self, key: &QueryKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop entries unused for longer than the GC window.
    pub fn collect_garbage(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        let gc_time_ms = self.gc_time_ms;
        self.entries
            .retain(|_, entry| now.saturating_sub(entry.last_used) <= gc_time_ms);
        let evicted = before - self.entries.len();
        if evicted > 0 {
            log::debug!("query cache: evicted {evicted} unused entries");
        }
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(parts: &[&str]) -> QueryKey {
        QueryKey::new(parts.iter().copied())
    }

    #[test]
    fn key_displays_joined_segments() {
        assert_eq!(key(&["categories", "detail", "crm", "1", "12"]).to_string(), "categories/detail/crm/1/12");
        assert!(key(&["categories", "detail", "crm"]).starts_with(&key(&["categories"])));
        assert!(!key(&["articles", "list"]).starts_with(&key(&["categories"])));
    }

    #[test]
    fn retry_delay_doubles_and_caps() {
        assert_eq!(retry_delay_ms(0), 1000);
        assert_eq!(retry_delay_ms(1), 2000);
        assert_eq!(retry_delay_ms(4), 16000);
        assert_eq!(retry_delay_ms(5), 30000);
        assert_eq!(retry_delay_ms(80), 30000);
    }

    #[test]
    fn retry_budget_and_status_both_gate_retries() {
        let options = QueryOptions::default().retry(2);
        let server = ApiError::http(500, "");
        assert!(should_retry(1, &options, &server));
        assert!(should_retry(2, &options, &server));
        assert!(!should_retry(3, &options, &server));
        assert!(!should_retry(1, &options, &ApiError::http(404, "Not Found")));
    }

    #[test]
    fn lookup_goes_fresh_then_stale() {
        let mut cache = QueryCache::default();
        let k = key(&["article", "hello"]);
        cache.insert(k.clone(), Rc::new(String::from("body")), 1_000);

        match cache.lookup::<String>(&k, 60_000, 30_000) {
            Cached::Fresh(v) => assert_eq!(v.as_str(), "body"),
            other => panic!("expected fresh, got {other:?}"),
        }
        assert!(matches!(cache.lookup::<String>(&k, 60_000, 61_000), Cached::Stale(_)));
        assert!(matches!(cache.lookup::<String>(&key(&["other"]), 60_000, 0), Cached::Missing));
    }

    #[test]
    fn wrong_type_reads_as_missing() {
        let mut cache = QueryCache::default();
        let k = key(&["n"]);
        cache.insert(k.clone(), Rc::new(7u32), 0);
        assert!(matches!(cache.lookup::<String>(&k, 1_000, 0), Cached::Missing));
    }

    #[test]
    fn invalidation_marks_entries_stale() {
        let mut cache = QueryCache::default();
        cache.insert(key(&["categories", "list", "a"]), Rc::new(1u8), 0);
        cache.insert(key(&["categories", "detail", "b"]), Rc::new(2u8), 0);
        cache.insert(key(&["article", "c"]), Rc::new(3u8), 0);

        assert_eq!(cache.invalidate_prefix(&key(&["categories"])), 2);
        assert!(matches!(cache.lookup::<u8>(&key(&["categories", "list", "a"]), 60_000, 1), Cached::Stale(_)));
        assert!(matches!(cache.lookup::<u8>(&key(&["article", "c"]), 60_000, 1), Cached::Fresh(_)));

        assert!(cache.invalidate(&key(&["article", "c"])));
        assert!(!cache.invalidate(&key(&["missing"])));
        assert!(cache.lookup::<u8>(&key(&["article", "c"]), 60_000, 2).needs_fetch());
    }

    #[test]
    fn garbage_collection_spares_recently_used_entries() {
        let mut cache = QueryCache::new(10_000);
        cache.insert(key(&["old"]), Rc::new(1u8), 0);
        cache.insert(key(&["used"]), Rc::new(2u8), 0);
        let _ = cache.lookup::<u8>(&key(&["used"]), 1_000, 8_000);

        assert_eq!(cache.collect_garbage(15_000), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.lookup::<u8>(&key(&["used"]), 1_000, 15_000).data().is_some());
    }
}
