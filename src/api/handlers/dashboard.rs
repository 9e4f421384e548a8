//! Dashboard placeholder handler.

use axum::{Extension, Json, http::Uri};
use serde_json::json;

use crate::api::dto::dashboard::DashboardResponse;
use crate::domain::entities::Session;
use crate::error::AppError;

/// Echoes the session attached by the request gate.
///
/// # Endpoint
///
/// `GET /dashboard` and `GET /dashboard/{*rest}`
///
/// # Errors
///
/// Returns `401 Unauthorized` if the request reached the handler without a
/// session, which only happens when the router is served without the gate.
pub async fn dashboard_handler(
    session: Option<Extension<Session>>,
    uri: Uri,
) -> Result<Json<DashboardResponse>, AppError> {
    let Extension(session) = session.ok_or_else(|| {
        AppError::unauthorized("Unauthorized", json!({"reason": "No session on request"}))
    })?;

    Ok(Json(DashboardResponse::new(session, uri.path())))
}
