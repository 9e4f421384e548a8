//! Helpers shared across layers.
//!
//! - [`click_metadata`] - Device, browser, OS and source extraction for clicks

pub mod click_metadata;
