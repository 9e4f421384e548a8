#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::http::{HeaderMap, header::COOKIE};
use chrono::{Duration as ChronoDuration, Utc};
use serde_json::json;
use slug_gate::application::services::ClickScheduler;
use slug_gate::config::Config;
use slug_gate::domain::click_event::ClickEvent;
use slug_gate::domain::entities::{Link, NewClick, Session};
use slug_gate::domain::repositories::{ClickRepository, LinkRepository, SessionProvider};
use slug_gate::error::AppError;
use slug_gate::infrastructure::cache::{LruSlugCache, SlugCache};
use slug_gate::routes::app_router;
use slug_gate::state::AppState;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{Notify, mpsc};

pub const SESSION_TOKEN: &str = "valid-token";
pub const TARGET: &str = "https://example.com/target";

/// In-memory link store that counts lookups and can be switched to failing.
#[derive(Default)]
pub struct FakeLinks {
    links: Mutex<HashMap<String, Link>>,
    lookups: AtomicUsize,
    failing: AtomicBool,
}

impl FakeLinks {
    pub fn with_links(links: impl IntoIterator<Item = Link>) -> Self {
        let store = Self::default();
        for link in links {
            store.insert(link);
        }
        store
    }

    pub fn insert(&self, link: Link) {
        self.links.lock().unwrap().insert(link.slug.clone(), link);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl LinkRepository for FakeLinks {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::internal("store offline", json!({})));
        }

        Ok(self.links.lock().unwrap().get(slug).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::unavailable("store offline", json!({})));
        }
        Ok(())
    }
}

/// Accepts exactly one session token, carried in the default session cookie.
#[derive(Default)]
pub struct FakeSessions {
    calls: AtomicUsize,
}

impl FakeSessions {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionProvider for FakeSessions {
    async fn get_session(&self, headers: &HeaderMap) -> Result<Option<Session>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let authenticated = headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|c| c.contains(&format!("authjs.session-token={SESSION_TOKEN}")));

        Ok(authenticated.then(|| Session::new("user-1", Utc::now() + ChronoDuration::hours(1))))
    }
}

/// Click sink that records writes and can be told to hang.
#[derive(Default)]
pub struct RecordingClicks {
    pub clicks: Mutex<Vec<NewClick>>,
    pub written: Notify,
    hang: AtomicBool,
}

impl RecordingClicks {
    pub fn hanging() -> Self {
        let clicks = Self::default();
        clicks.hang.store(true, Ordering::SeqCst);
        clicks
    }

    pub fn recorded(&self) -> Vec<NewClick> {
        self.clicks.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClickRepository for RecordingClicks {
    async fn record_click(&self, new_click: NewClick) -> Result<(), AppError> {
        if self.hang.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }

        self.clicks.lock().unwrap().push(new_click);
        self.written.notify_one();
        Ok(())
    }
}

pub fn link(slug: &str) -> Link {
    Link::new(format!("id-{slug}"), slug, TARGET, "user-1")
}

pub fn expired_link(slug: &str) -> Link {
    link(slug).with_expires_at(Utc::now() - ChronoDuration::hours(1))
}

pub fn test_config() -> Config {
    Config {
        lookup_retries: 0,
        lookup_timeout_ms: 500,
        ..Config::default()
    }
}

/// Everything a gate test needs to observe side effects.
pub struct TestApp {
    pub router: Router,
    pub links: Arc<FakeLinks>,
    pub sessions: Arc<FakeSessions>,
    pub cache: Arc<dyn SlugCache>,
    pub click_rx: mpsc::Receiver<ClickEvent>,
}

/// Builds the full router with fakes; clicks stay queued in `click_rx`.
pub fn test_app(links: FakeLinks) -> TestApp {
    let config = test_config();
    let links = Arc::new(links);
    let sessions = Arc::new(FakeSessions::default());
    let cache: Arc<dyn SlugCache> = Arc::new(LruSlugCache::new(
        NonZeroUsize::new(100).unwrap(),
        Duration::from_secs(60),
    ));
    let (clicks, click_rx) = ClickScheduler::channel(16);

    let state = AppState::new(
        &config,
        links.clone(),
        sessions.clone(),
        cache.clone(),
        clicks,
    )
    .unwrap();

    TestApp {
        router: app_router(state),
        links,
        sessions,
        cache,
        click_rx,
    }
}

pub fn session_cookie() -> String {
    format!("authjs.session-token={SESSION_TOKEN}")
}
