//! Application layer services driving the request gate.
//!
//! Services consume the repository traits from [`crate::domain`] and hold no
//! HTTP types beyond request headers.
//!
//! # Available Services
//!
//! - [`services::PathClassifier`] - Sorts request paths into root, reserved, dashboard or slug
//! - [`services::AuthGate`] - Session check with login redirect for dashboard paths
//! - [`services::SlugResolver`] - Cache-then-store slug lookup with expiry evaluation
//! - [`services::ClickScheduler`] - Non-blocking handoff of clicks to the worker

pub mod services;
