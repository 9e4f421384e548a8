//! Slug cache trait and value types.

use crate::domain::entities::Link;

/// A cached resolution result.
///
/// `Absent` records that the backing store confirmed the slug does not exist
/// (negative caching). It is a cache hit, distinct from a miss.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedSlug {
    Found(Link),
    Absent,
}

impl From<Option<Link>> for CachedSlug {
    fn from(value: Option<Link>) -> Self {
        match value {
            Some(link) => Self::Found(link),
            None => Self::Absent,
        }
    }
}

/// Point-in-time cache counters for the health endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Bounded slug → [`CachedSlug`] cache shared by all requests.
///
/// Implementations are synchronous and must be safe to call from many tasks
/// at once. `get` counts as a use of the entry.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::LruSlugCache`] - In-memory LRU with TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
pub trait SlugCache: Send + Sync {
    /// Returns the live entry for `slug`, or `None` on a miss.
    ///
    /// An entry older than the TTL is removed and reported as a miss.
    fn get(&self, slug: &str) -> Option<CachedSlug>;

    /// Inserts or replaces the entry for `slug`, evicting the least
    /// recently used entry when the cache is full.
    fn set(&self, slug: &str, value: CachedSlug);

    /// Number of entries currently held, expired or not.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> CacheStats;
}
