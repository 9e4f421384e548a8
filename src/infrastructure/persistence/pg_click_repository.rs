//! PostgreSQL implementation of click repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::NewClick;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL sink for click records.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    /// Inserts the click and bumps `links.clicks` in one transaction.
    async fn record_click(&self, new_click: NewClick) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO clicks (link_id, device, browser, os, country, city, referer, source)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&new_click.link_id)
        .bind(&new_click.device)
        .bind(&new_click.browser)
        .bind(&new_click.os)
        .bind(&new_click.country)
        .bind(&new_click.city)
        .bind(&new_click.referer)
        .bind(&new_click.source)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE links SET clicks = clicks + 1 WHERE id = $1")
            .bind(&new_click.link_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
