//! Repository trait for click analytics.

use crate::domain::entities::NewClick;
use crate::error::AppError;
use async_trait::async_trait;

/// Write-only sink for click records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records one click and bumps the link's click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Callers log and
    /// discard the error.
    async fn record_click(&self, new_click: NewClick) -> Result<(), AppError>;
}
