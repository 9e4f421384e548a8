//! Core domain entities.
//!
//! Plain data structures with no I/O:
//!
//! - [`Link`] - A short link record owned by the backing store
//! - [`NewClick`] - A click record produced after a redirect
//! - [`Session`] - An authenticated dashboard session

pub mod click;
pub mod link;
pub mod session;

pub use click::NewClick;
pub use link::Link;
pub use session::Session;
