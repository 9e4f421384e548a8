//! PostgreSQL implementations of the collaborator traits.
//!
//! Queries are bound at runtime with SQLx, so building the crate does not
//! need a live database. The schema lives in `migrations/`.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Slug lookup
//! - [`PgClickRepository`] - Click insert and counter update
//! - [`PgSessionProvider`] - Session-token cookie lookup

pub mod pg_click_repository;
pub mod pg_link_repository;
pub mod pg_session_provider;

pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
pub use pg_session_provider::PgSessionProvider;
