//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for slug lookups.
///
/// Queries are bound at runtime (`query_as`) so the crate builds without a
/// database; the row shape is checked by [`LinkRow`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: String,
    slug: String,
    original_url: String,
    expires_at: Option<DateTime<Utc>>,
    clicks: i64,
    user_id: String,
    folder_id: Option<String>,
    is_custom: bool,
    created_at: DateTime<Utc>,
    title: Option<String>,
    description: Option<String>,
    favicon: Option<String>,
    screenshot: Option<String>,
    note: Option<String>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link {
            id: r.id,
            slug: r.slug,
            original_url: r.original_url,
            expires_at: r.expires_at,
            clicks: r.clicks,
            user_id: r.user_id,
            folder_id: r.folder_id,
            is_custom: r.is_custom,
            created_at: r.created_at,
            title: r.title,
            description: r.description,
            favicon: r.favicon,
            screenshot: r.screenshot,
            note: r.note,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, slug, original_url, expires_at, clicks, user_id, folder_id,
                   is_custom, created_at, title, description, favicon, screenshot, note
            FROM links
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
