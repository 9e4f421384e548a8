//! Shared application state injected into the request gate and handlers.

use std::sync::Arc;

use anyhow::Context;
use axum::http::uri::PathAndQuery;

use crate::application::services::{
    AuthGate, ClickScheduler, PathClassifier, ReservedPaths, SlugResolver,
};
use crate::config::Config;
use crate::domain::repositories::{LinkRepository, SessionProvider};
use crate::infrastructure::cache::SlugCache;

/// Cloned per request by axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<PathClassifier>,
    pub auth_gate: Arc<AuthGate>,
    pub resolver: Arc<SlugResolver>,
    pub clicks: ClickScheduler,
    pub links: Arc<dyn LinkRepository>,
    /// Rewrite target for unknown and expired slugs.
    pub not_found: PathAndQuery,
}

impl AppState {
    /// Wires the gate services from configuration and collaborators.
    ///
    /// The login and not-found paths are added to the reserved table so the
    /// gate never classifies its own targets as slugs.
    ///
    /// # Errors
    ///
    /// Returns an error if `NOT_FOUND_PATH` is not a valid URI path.
    pub fn new(
        config: &Config,
        links: Arc<dyn LinkRepository>,
        sessions: Arc<dyn SessionProvider>,
        cache: Arc<dyn SlugCache>,
        clicks: ClickScheduler,
    ) -> anyhow::Result<Self> {
        let not_found: PathAndQuery = config
            .not_found_path
            .parse()
            .with_context(|| format!("Invalid NOT_FOUND_PATH '{}'", config.not_found_path))?;

        let reserved = ReservedPaths::new(&config.reserved_paths)
            .with_path(&config.login_path)
            .with_path(not_found.path());

        let resolver = SlugResolver::new(
            links.clone(),
            cache,
            config.lookup_timeout(),
            config.lookup_retries,
        );

        Ok(Self {
            classifier: Arc::new(PathClassifier::new(&config.dashboard_prefix, reserved)),
            auth_gate: Arc::new(AuthGate::new(sessions, &config.login_path)),
            resolver: Arc::new(resolver),
            clicks,
            links,
            not_found,
        })
    }

    pub fn cache(&self) -> &Arc<dyn SlugCache> {
        self.resolver.cache()
    }
}
