//! Render output cache subsystem.
//!
//! # Design Decisions
//! - Exact LRU (hash map + doubly linked recency list), not an approximation
//! - One mutex per cache instance; every operation is O(1) amortized
//! - `max_entries == 0` is a permanent no-op cache (caching disabled)
//! - No single-flight: concurrent misses on one key may render twice and
//!   the last `set` wins. Deliberate, documented behavior.

pub mod lru;

use std::sync::{Arc, Mutex};

use crate::observability::metrics;
use self::lru::LruList;

struct CacheInner {
    state: Mutex<LruList>,
    max_entries: usize,
}

/// Concurrent-safe bounded cache of rendered output, keyed by an opaque
/// string.
///
/// Cheap to clone; clones share the same entries. Safe under arbitrary
/// concurrent calls from many tasks.
#[derive(Clone)]
pub struct RenderCache {
    inner: Arc<CacheInner>,
}

impl RenderCache {
    /// Create a cache holding at most `max_entries` entries. Zero
    /// disables caching entirely: every `get` misses and every mutation
    /// is inert.
    pub fn new(max_entries: usize) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                state: Mutex::new(LruList::new()),
                max_entries,
            }),
        }
    }

    fn disabled(&self) -> bool {
        self.inner.max_entries == 0
    }

    /// Look up `key`, promoting the entry to most-recently-used on a hit.
    pub fn get(&self, key: &str) -> Option<String> {
        if self.disabled() {
            metrics::record_cache_miss();
            return None;
        }
        let mut state = self.inner.state.lock().expect("cache mutex poisoned");
        match state.get(key) {
            Some(value) => {
                metrics::record_cache_hit();
                Some(value.to_string())
            }
            None => {
                metrics::record_cache_miss();
                None
            }
        }
    }

    /// Insert or overwrite `key`.
    ///
    /// An overwrite promotes the entry; a fresh insert at capacity first
    /// evicts exactly one least-recently-used entry.
    pub fn set(&self, key: &str, value: &str) {
        if self.disabled() {
            return;
        }
        let mut state = self.inner.state.lock().expect("cache mutex poisoned");
        if !state.contains(key) && state.len() >= self.inner.max_entries {
            if let Some(evicted) = state.pop_lru() {
                tracing::debug!(key = %evicted, "cache entry evicted");
            }
        }
        state.insert(key, value);
        metrics::record_cache_size(state.len());
    }

    /// Remove `key` if present; no-op otherwise.
    pub fn delete(&self, key: &str) {
        if self.disabled() {
            return;
        }
        let mut state = self.inner.state.lock().expect("cache mutex poisoned");
        state.remove(key);
        metrics::record_cache_size(state.len());
    }

    /// Atomically drop every entry.
    pub fn flush(&self) {
        if self.disabled() {
            return;
        }
        let mut state = self.inner.state.lock().expect("cache mutex poisoned");
        let dropped = state.len();
        state.clear();
        metrics::record_cache_size(0);
        tracing::info!(dropped, "cache flushed");
    }

    /// Current entry count.
    pub fn len(&self) -> usize {
        if self.disabled() {
            return 0;
        }
        self.inner.state.lock().expect("cache mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured capacity.
    pub fn max_entries(&self) -> usize {
        self.inner.max_entries
    }
}
