//! Repository trait definitions for the domain layer.
//!
//! These traits are the collaborators the resolver consumes. Concrete
//! implementations live in `crate::infrastructure`; mocks are generated by
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Single-slug lookup
//! - [`ClickRepository`] - Fire-and-forget click recording
//! - [`SessionProvider`] - Dashboard session lookup

pub mod click_repository;
pub mod link_repository;
pub mod session_provider;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;
pub use session_provider::SessionProvider;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use session_provider::MockSessionProvider;
