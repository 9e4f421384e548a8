//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and caching.
//!
//! # Modules
//!
//! - [`cache`] - In-process slug cache (LRU with TTL, or no-op)
//! - [`persistence`] - PostgreSQL implementations of the collaborator traits

pub mod cache;
pub mod persistence;
