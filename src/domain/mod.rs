//! Domain layer containing entities, collaborator traits and the click pipeline.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (link, click, session)
//! - [`repositories`] - Collaborator trait definitions
//! - [`click_event`] - Click data captured on the redirect path
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. The request gate redirects a valid slug
//! 2. [`click_event::ClickEvent`] is pushed onto a bounded channel
//! 3. [`click_worker::run_click_worker`] extracts metadata and writes the click
//! 4. Click data is persisted via [`repositories::ClickRepository`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
