//! Cache-then-store slug resolution.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CachedSlug, SlugCache};

/// Longest slug that is looked up at all.
pub const MAX_SLUG_LEN: usize = 256;

/// Result of resolving a slug.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveOutcome {
    NotFound,
    /// The link exists but its `expires_at` has passed.
    Expired,
    Valid(Link),
}

/// Resolves slugs through the shared [`SlugCache`], falling back to the
/// backing store on a miss.
///
/// The raw store result (link or absent) is cached, never the post-expiry
/// outcome, so a cached link turns from valid to expired on wall-clock time
/// alone. Lookup errors and timeouts are never cached.
pub struct SlugResolver {
    links: Arc<dyn LinkRepository>,
    cache: Arc<dyn SlugCache>,
    lookup_timeout: Duration,
    retries: usize,
}

impl SlugResolver {
    /// Creates a resolver.
    ///
    /// # Arguments
    ///
    /// - `lookup_timeout` - bound on a single store attempt; a timeout counts
    ///   as a transient error
    /// - `retries` - extra attempts after a transient error (`0` disables retry)
    pub fn new(
        links: Arc<dyn LinkRepository>,
        cache: Arc<dyn SlugCache>,
        lookup_timeout: Duration,
        retries: usize,
    ) -> Self {
        Self {
            links,
            cache,
            lookup_timeout,
            retries,
        }
    }

    pub fn cache(&self) -> &Arc<dyn SlugCache> {
        &self.cache
    }

    /// Resolves `slug` to a redirect outcome.
    ///
    /// Never fails: any lookup error is logged and reported as
    /// [`ResolveOutcome::NotFound`].
    pub async fn resolve(&self, slug: &str) -> ResolveOutcome {
        if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
            return ResolveOutcome::NotFound;
        }

        let cached = match self.cache.get(slug) {
            Some(hit) => {
                debug!(slug, "Slug cache HIT");
                hit
            }
            None => {
                debug!(slug, "Slug cache MISS");
                match self.lookup(slug).await {
                    Ok(result) => {
                        let value = CachedSlug::from(result);
                        self.cache.set(slug, value.clone());
                        value
                    }
                    Err(e) => {
                        metrics::counter!("slug_lookup_errors_total").increment(1);
                        error!(slug, error = %e, "Slug lookup failed, treating as not found");
                        return ResolveOutcome::NotFound;
                    }
                }
            }
        };

        match cached {
            CachedSlug::Absent => ResolveOutcome::NotFound,
            CachedSlug::Found(link) if link.is_expired_at(Utc::now()) => ResolveOutcome::Expired,
            CachedSlug::Found(link) => ResolveOutcome::Valid(link),
        }
    }

    /// Queries the backing store with a per-attempt timeout, retrying
    /// transient failures with jittered exponential backoff.
    async fn lookup(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let strategy = ExponentialBackoff::from_millis(10)
            .max_delay(Duration::from_millis(200))
            .map(jitter)
            .take(self.retries);

        let links = &self.links;
        let timeout = self.lookup_timeout;

        RetryIf::start(
            strategy,
            || async move {
                match tokio::time::timeout(timeout, links.find_by_slug(slug)).await {
                    Ok(result) => result,
                    Err(_) => Err(AppError::unavailable(
                        "Slug lookup timed out",
                        json!({ "timeout_ms": timeout.as_millis() as u64 }),
                    )),
                }
            },
            |e: &AppError| e.is_transient(),
        )
        .await
    }
}
