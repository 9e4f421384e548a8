//! Services behind the request gate.

pub mod auth_gate;
pub mod click_scheduler;
pub mod path_classifier;
pub mod slug_resolver;

pub use auth_gate::{AuthGate, GateDecision};
pub use click_scheduler::ClickScheduler;
pub use path_classifier::{PathClass, PathClassifier, ReservedPaths};
pub use slug_resolver::{ResolveOutcome, SlugResolver};
