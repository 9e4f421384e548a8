//! Downstream route table.
//!
//! These routes only see requests the request gate let through: root,
//! reserved paths, authenticated dashboard paths and not-found rewrites.

use crate::api::handlers::{
    dashboard_handler, health_handler, index_handler, not_found_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes behind the gate.
///
/// # Endpoints
///
/// - `GET /`                     - Landing text
/// - `GET /api/health`           - Component health
/// - `GET <NOT_FOUND_PATH>`      - 404 page, target of slug rewrites
/// - `GET /<prefix>[/{*rest}]`   - Dashboard placeholder (session required)
///
/// Anything else falls back to the 404 page.
pub fn downstream_routes(state: &AppState) -> Router<AppState> {
    let dashboard = format!("/{}", state.classifier.dashboard_prefix());

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route(state.not_found.path(), get(not_found_handler))
        .route(&dashboard, get(dashboard_handler))
        .route(&format!("{dashboard}/{{*rest}}"), get(dashboard_handler))
        .fallback(not_found_handler)
}
