//! Top-level router: request gate in front of the downstream routes.
//!
//! # Request Flow
//!
//! ```text
//! request -> TraceLayer -> request gate -> downstream router
//!                              |
//!                              +-> 307 to login (dashboard, no session)
//!                              +-> 307 to target (valid slug)
//!                              +-> URI rewrite to not-found (unknown/expired slug)
//! ```

use crate::api;
use crate::api::middleware::{request_gate, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let inner = api::routes::downstream_routes(&state).with_state(state.clone());
    wrap(state, inner)
}

/// Puts the request gate in front of `inner`.
///
/// `inner` is mounted as the fallback service of an empty router, so the
/// gate runs before `inner` does its own routing and a rewritten URI is
/// matched against `inner`'s routes.
pub fn wrap(state: AppState, inner: Router) -> Router {
    Router::new().fallback_service(inner).layer(
        ServiceBuilder::new()
            .layer(tracing::layer())
            .layer(middleware::from_fn_with_state(state, request_gate::layer)),
    )
}
