//! HTTP middleware for request processing.
//!
//! Provides the edge request gate and observability middleware.

pub mod request_gate;
pub mod tracing;
