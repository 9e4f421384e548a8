//! HTTP layer for request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request gate and tracing middleware
//! - [`routes`] - Downstream route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
