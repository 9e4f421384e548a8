//! Authenticated dashboard session.

use chrono::{DateTime, Utc};

/// A live session returned by a [`crate::domain::repositories::SessionProvider`].
///
/// Attached to the request extensions when the auth gate lets a dashboard
/// request through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub expires: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, expires: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            expires,
        }
    }
}
