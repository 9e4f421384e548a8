//! Session lookup used by the dashboard auth gate.

use crate::domain::entities::Session;
use crate::error::AppError;
use async_trait::async_trait;
use axum::http::HeaderMap;

/// Resolves the session carried by a request, if any.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSessionProvider`] - cookie + `sessions` table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the live session for these request headers.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))` for a valid, unexpired session
    /// - `Ok(None)` when the request carries no session or it has expired
    ///
    /// # Errors
    ///
    /// Returns an error when the provider itself fails. The auth gate treats
    /// this the same as `Ok(None)`.
    async fn get_session(&self, headers: &HeaderMap) -> Result<Option<Session>, AppError>;
}
