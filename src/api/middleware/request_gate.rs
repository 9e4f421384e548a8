//! Edge middleware that decides every request before routing.

use axum::{
    extract::{Request, State},
    http::{Uri, uri::PathAndQuery},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, warn};

use crate::application::services::{GateDecision, PathClass, ResolveOutcome};
use crate::domain::click_event::ClickEvent;
use crate::state::AppState;

/// Classifies the request path and acts on it.
///
/// # Decisions
///
/// - **Root / reserved** - passed through untouched, no session or store access
/// - **Dashboard** - session required; otherwise `307` to the login page with
///   `callbackUrl` set to the original path and query. The [`Session`] is
///   attached to the request extensions for the dashboard handlers.
/// - **Slug** - resolved through the cache and store:
///   - valid link: `307` to the target, click scheduled without waiting
///   - unknown or expired: URI rewritten to the not-found page and passed on
///
/// The layer must wrap the whole router (see [`crate::routes::wrap`]) so the
/// rewritten URI is what the downstream router matches on.
///
/// [`Session`]: crate::domain::entities::Session
pub async fn layer(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    let class = st.classifier.classify(req.uri().path());

    match class {
        PathClass::Root | PathClass::ReservedNonDashboard => next.run(req).await,

        PathClass::Dashboard => {
            let original = original_target(req.uri());

            match st.auth_gate.check(req.headers(), &original).await {
                GateDecision::Allow(session) => {
                    req.extensions_mut().insert(session);
                    next.run(req).await
                }
                GateDecision::Login(location) => Redirect::temporary(&location).into_response(),
            }
        }

        PathClass::SlugCandidate(slug) => match st.resolver.resolve(&slug).await {
            ResolveOutcome::Valid(link) => {
                let event = ClickEvent::from_request(&link.id, req.headers(), req.uri().query());
                st.clicks.schedule(event);

                debug!(slug = %slug, target = %link.original_url, "Redirecting");
                Redirect::temporary(&link.original_url).into_response()
            }
            outcome => {
                debug!(slug = %slug, ?outcome, "Rewriting to not-found page");
                rewrite(&mut req, &st.not_found);
                next.run(req).await
            }
        },
    }
}

fn original_target(uri: &Uri) -> String {
    uri.path_and_query()
        .map(PathAndQuery::as_str)
        .unwrap_or_else(|| uri.path())
        .to_string()
}

/// Replaces the path and query of `req` in place, keeping scheme and authority.
fn rewrite(req: &mut Request, target: &PathAndQuery) {
    let mut parts = req.uri().clone().into_parts();
    parts.path_and_query = Some(target.clone());

    match Uri::from_parts(parts) {
        Ok(uri) => *req.uri_mut() = uri,
        Err(e) => warn!(error = %e, "Failed to rewrite request URI"),
    }
}
