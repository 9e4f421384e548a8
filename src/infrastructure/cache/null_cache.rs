//! No-op cache implementation for disabled caching.

use super::service::{CacheStats, CachedSlug, SlugCache};
use tracing::debug;

/// A cache implementation that stores nothing.
///
/// Used when `SLUG_CACHE_MAX_ENTRIES=0`. Every lookup is a miss, so every
/// request reaches the backing store.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SlugCache for NullCache {
    fn get(&self, _slug: &str) -> Option<CachedSlug> {
        None
    }

    fn set(&self, _slug: &str, _value: CachedSlug) {}

    fn len(&self) -> usize {
        0
    }

    fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}
