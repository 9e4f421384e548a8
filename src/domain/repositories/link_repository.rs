//! Repository trait for slug lookups.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the backing store's link table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its slug.
    ///
    /// Expired links are returned as stored; expiry is evaluated by the caller.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if no link has this slug
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the store is unreachable and
    /// [`AppError::Internal`] on other database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Cheap round trip to the store, used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
