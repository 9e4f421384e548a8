//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Round trip through the link store
/// 2. **Click Queue**: Checks if channel is open and reports free slots
/// 3. **Cache**: Reports slug cache occupancy and hit/miss counters
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "click_queue": { "status": "ok", "message": "Free slots: 10000 of 10000" },
///     "cache": { "status": "ok", "message": "12/10000 entries, 40 hits, 12 misses" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let queue_check = check_click_queue(&state);

    let cache_check = check_cache(&state);

    let all_healthy = db_check.is_ok() && queue_check.is_ok() && cache_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            click_queue: queue_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.links.ping().await {
        Ok(()) => CheckStatus::ok("Connected"),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

fn check_click_queue(state: &AppState) -> CheckStatus {
    if state.clicks.is_closed() {
        CheckStatus::error("Click queue is closed")
    } else {
        CheckStatus::ok(format!(
            "Free slots: {} of {}",
            state.clicks.capacity(),
            state.clicks.max_capacity()
        ))
    }
}

/// The in-process cache cannot fail; a disabled cache is reported as such.
fn check_cache(state: &AppState) -> CheckStatus {
    let stats = state.cache().stats();

    if stats.capacity == 0 {
        return CheckStatus::ok("Disabled");
    }

    CheckStatus::ok(format!(
        "{}/{} entries, {} hits, {} misses",
        stats.entries, stats.capacity, stats.hits, stats.misses
    ))
}
