//! In-process slug cache for fast redirect lookups.
//!
//! Provides a [`SlugCache`] trait with two implementations:
//! - [`LruSlugCache`] - Bounded LRU cache with per-entry TTL and negative caching
//! - [`NullCache`] - No-op implementation for disabled caching

mod lru_cache;
mod null_cache;
mod service;

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::config::Config;

pub use lru_cache::LruSlugCache;
pub use null_cache::NullCache;
pub use service::{CacheStats, CachedSlug, SlugCache};

/// Builds the process-wide slug cache described by `config`.
pub fn build_slug_cache(config: &Config) -> Arc<dyn SlugCache> {
    match NonZeroUsize::new(config.cache_max_entries) {
        Some(capacity) => {
            tracing::info!(
                "Slug cache enabled ({} entries, TTL {}ms)",
                capacity,
                config.cache_ttl_ms
            );
            Arc::new(LruSlugCache::new(capacity, config.cache_ttl()))
        }
        None => {
            tracing::info!("Slug cache disabled (NullCache)");
            Arc::new(NullCache::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_disabled_cache() {
        let config = Config {
            cache_max_entries: 0,
            ..Config::default()
        };
        let cache = build_slug_cache(&config);

        cache.set("a", CachedSlug::Absent);
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn test_build_enabled_cache() {
        let config = Config {
            cache_max_entries: 2,
            ..Config::default()
        };
        let cache = build_slug_cache(&config);

        cache.set("a", CachedSlug::Absent);
        assert_eq!(cache.get("a"), Some(CachedSlug::Absent));
        assert_eq!(cache.stats().capacity, 2);
    }
}
