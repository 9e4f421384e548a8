//! Cookie-based session lookup against the `sessions` table.

use async_trait::async_trait;
use axum::http::{HeaderMap, header::COOKIE};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionProvider;
use crate::error::AppError;

/// Prefix browsers require for cookies set with `Secure` on HTTPS origins.
const SECURE_PREFIX: &str = "__Secure-";

/// Resolves dashboard sessions from a session-token cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: authjs.session-token=<token>
/// Cookie: __Secure-authjs.session-token=<token>
/// ```
///
/// The plain name wins when both are present.
pub struct PgSessionProvider {
    pool: Arc<PgPool>,
    cookie_name: String,
    secure_cookie_name: String,
}

impl PgSessionProvider {
    pub fn new(pool: Arc<PgPool>, cookie_name: impl Into<String>) -> Self {
        let cookie_name = cookie_name.into();
        Self {
            pool,
            secure_cookie_name: format!("{SECURE_PREFIX}{cookie_name}"),
            cookie_name,
        }
    }

    fn session_token(&self, headers: &HeaderMap) -> Option<String> {
        find_cookie(headers, &self.cookie_name)
            .or_else(|| find_cookie(headers, &self.secure_cookie_name))
    }
}

/// Finds a cookie by name across all `Cookie` headers.
fn find_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name && !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    user_id: String,
    expires: DateTime<Utc>,
}

#[async_trait]
impl SessionProvider for PgSessionProvider {
    async fn get_session(&self, headers: &HeaderMap) -> Result<Option<Session>, AppError> {
        let Some(token) = self.session_token(headers) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT user_id, expires
            FROM sessions
            WHERE session_token = $1 AND expires > NOW()
            "#,
        )
        .bind(&token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| Session::new(r.user_id, r.expires)))
    }
}
