//! HTTP request handlers for the routes behind the request gate.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod dashboard;
pub mod health;
pub mod pages;

pub use dashboard::dashboard_handler;
pub use health::health_handler;
pub use pages::{index_handler, not_found_handler};
