//! Data Transfer Objects for JSON responses.

pub mod dashboard;
pub mod health;
