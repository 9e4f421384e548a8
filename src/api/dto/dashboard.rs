//! DTOs for the dashboard placeholder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Session;

/// Session details echoed back to a signed-in visitor.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user_id: String,
    pub session_expires: DateTime<Utc>,
    /// Dashboard path that was requested.
    pub path: String,
}

impl DashboardResponse {
    pub fn new(session: Session, path: impl Into<String>) -> Self {
        Self {
            user_id: session.user_id,
            session_expires: session.expires,
            path: path.into(),
        }
    }
}
