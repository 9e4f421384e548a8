//! Bounded LRU slug cache with per-entry TTL.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use lru::LruCache;
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::trace;

use super::service::{CacheStats, CachedSlug, SlugCache};

struct Entry {
    value: CachedSlug,
    inserted_at: Instant,
}

/// In-memory slug cache.
///
/// Access order is kept by [`LruCache`] (hash map + linked list), so get,
/// set and eviction are O(1). Every operation takes a single mutex, which
/// makes each `get`/`set` serializable without cross-key atomicity.
///
/// Entries are never refreshed in place: a read does not extend the TTL,
/// and re-resolving a slug replaces the whole entry.
pub struct LruSlugCache {
    inner: Mutex<LruCache<String, Entry>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LruSlugCache {
    pub fn new(max_entries: NonZeroUsize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(max_entries)),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("slug_cache_misses_total").increment(1);
    }
}

impl SlugCache for LruSlugCache {
    fn get(&self, slug: &str) -> Option<CachedSlug> {
        let now = Instant::now();
        let mut cache = self.inner.lock();

        // `LruCache::get` moves the entry to the most-recently-used end.
        let lookup = cache.get(slug).map(|entry| {
            if now.saturating_duration_since(entry.inserted_at) > self.ttl {
                None
            } else {
                Some(entry.value.clone())
            }
        });

        match lookup {
            Some(Some(value)) => {
                drop(cache);
                self.hits.fetch_add(1, Ordering::Relaxed);
                metrics::counter!("slug_cache_hits_total").increment(1);
                Some(value)
            }
            Some(None) => {
                cache.pop(slug);
                drop(cache);
                trace!(slug, "Slug cache entry expired");
                self.record_miss();
                None
            }
            None => {
                drop(cache);
                self.record_miss();
                None
            }
        }
    }

    fn set(&self, slug: &str, value: CachedSlug) {
        let entry = Entry {
            value,
            inserted_at: Instant::now(),
        };

        let evicted = self.inner.lock().push(slug.to_string(), entry);

        if let Some((key, _)) = evicted
            && key != slug
        {
            trace!(evicted = %key, "Slug cache evicted least recently used entry");
        }
    }

    fn len(&self) -> usize {
        self.inner.lock().len()
    }

    fn stats(&self) -> CacheStats {
        let cache = self.inner.lock();
        CacheStats {
            entries: cache.len(),
            capacity: cache.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
