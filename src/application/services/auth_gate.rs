//! Session gate in front of dashboard paths.

use std::sync::Arc;

use axum::http::HeaderMap;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionProvider;

/// Outcome of a dashboard access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Continue to the dashboard handler with this session.
    Allow(Session),
    /// Redirect to this login location (already carries `callbackUrl`).
    Login(String),
}

/// Thin adapter over a [`SessionProvider`].
///
/// A provider error is treated like a missing session: the visitor is sent
/// to the login page and nothing is surfaced as a 5xx.
pub struct AuthGate {
    sessions: Arc<dyn SessionProvider>,
    login_path: String,
}

impl AuthGate {
    pub fn new(sessions: Arc<dyn SessionProvider>, login_path: impl Into<String>) -> Self {
        Self {
            sessions,
            login_path: login_path.into(),
        }
    }

    /// Checks the session for a dashboard request.
    ///
    /// `original` is the requested path (and query) the visitor returns to
    /// after logging in.
    pub async fn check(&self, headers: &HeaderMap, original: &str) -> GateDecision {
        match self.sessions.get_session(headers).await {
            Ok(Some(session)) => GateDecision::Allow(session),
            Ok(None) => {
                debug!(path = original, "No session, redirecting to login");
                GateDecision::Login(self.login_location(original))
            }
            Err(e) => {
                warn!(path = original, error = %e, "Session lookup failed, redirecting to login");
                GateDecision::Login(self.login_location(original))
            }
        }
    }

    /// Builds `<login_path>?callbackUrl=<original>`.
    pub fn login_location(&self, original: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("callbackUrl", original)
            .finish();
        format!("{}?{}", self.login_path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSessionProvider;
    use crate::error::AppError;
    use chrono::{Duration, Utc};
    use serde_json::json;

    fn gate(provider: MockSessionProvider) -> AuthGate {
        AuthGate::new(Arc::new(provider), "/login")
    }

    #[tokio::test]
    async fn test_valid_session_allows() {
        let session = Session::new("user-1", Utc::now() + Duration::hours(1));
        let expected = session.clone();

        let mut provider = MockSessionProvider::new();
        provider
            .expect_get_session()
            .times(1)
            .returning(move |_| Ok(Some(session.clone())));

        let decision = gate(provider)
            .check(&HeaderMap::new(), "/dashboard")
            .await;

        assert_eq!(decision, GateDecision::Allow(expected));
    }

    #[tokio::test]
    async fn test_missing_session_redirects_with_callback() {
        let mut provider = MockSessionProvider::new();
        provider.expect_get_session().returning(|_| Ok(None));

        let decision = gate(provider)
            .check(&HeaderMap::new(), "/dashboard/links")
            .await;

        assert_eq!(
            decision,
            GateDecision::Login("/login?callbackUrl=%2Fdashboard%2Flinks".to_string())
        );
    }

    #[tokio::test]
    async fn test_provider_error_fails_closed() {
        let mut provider = MockSessionProvider::new();
        provider
            .expect_get_session()
            .returning(|_| Err(AppError::unavailable("db down", json!({}))));

        let decision = gate(provider).check(&HeaderMap::new(), "/dashboard").await;

        assert_eq!(
            decision,
            GateDecision::Login("/login?callbackUrl=%2Fdashboard".to_string())
        );
    }

    #[test]
    fn test_login_location_encodes_query() {
        let gate = gate(MockSessionProvider::new());

        assert_eq!(
            gate.login_location("/dashboard?tab=a&b=c"),
            "/login?callbackUrl=%2Fdashboard%3Ftab%3Da%26b%3Dc"
        );
    }
}
