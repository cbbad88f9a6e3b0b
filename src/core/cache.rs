//! In-memory cache for sheet range responses
//!
//! Entries are stored in an LRU keyed by `spreadsheetId + range` alongside the
//! instant they were written. A read returns the value only while it is
//! younger than the cache TTL; stale entries are dropped on access, so the
//! next read falls through to the network.

use lru::LruCache;
use std::{
    fmt,
    hash::Hash,
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};

use crate::{SheetRange, SpreadsheetId};

/// Default lifetime of a cached range (two minutes).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(120);

/// Default number of ranges held in memory.
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Cache key for a fetched range
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetCacheKey {
    pub spreadsheet_id: SpreadsheetId,
    pub range: SheetRange,
}

impl SheetCacheKey {
    pub fn new(spreadsheet_id: SpreadsheetId, range: SheetRange) -> Self {
        Self {
            spreadsheet_id,
            range,
        }
    }
}

impl fmt::Display for SheetCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spreadsheet_id, self.range)
    }
}

struct Entry<V> {
    stored_at: Instant,
    value: V,
}

/// LRU cache whose entries expire after a fixed TTL
pub struct TtlCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    entries: Arc<Mutex<LruCache<K, Entry<V>>>>,
    capacity: usize,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries for `ttl` each
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Arc::new(Mutex::new(LruCache::new(cap))),
            capacity: cap.get(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, Entry<V>>> {
        // A panic while holding the lock cannot leave an entry half-written.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Return a fresh value, evicting it if it has expired
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.lock();
        let fresh = match entries.get(key) {
            Some(entry) => entry.stored_at.elapsed() < self.ttl,
            None => return None,
        };

        if fresh {
            entries.get(key).map(|entry| entry.value.clone())
        } else {
            entries.pop(key);
            None
        }
    }

    /// Store a value, stamping it with the current instant
    pub fn put(&self, key: K, value: V) {
        self.lock().put(
            key,
            Entry {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    /// Drop one entry so the next read goes to the network
    pub fn invalidate(&self, key: &K) {
        self.lock().pop(key);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// (entries held, capacity)
    pub fn stats(&self) -> (usize, usize) {
        (self.lock().len(), self.capacity)
    }
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL)
    }
}
