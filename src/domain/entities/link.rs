//! Link entity representing a slug → destination mapping.

use chrono::{DateTime, Utc};

/// A short link as stored by the backing store.
///
/// The resolver only inspects `slug`, `original_url` and `expires_at`.
/// The remaining fields are carried through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: String,
    pub slug: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: i64,
    pub user_id: String,
    pub folder_id: Option<String>,
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub screenshot: Option<String>,
    pub note: Option<String>,
}

impl Link {
    /// Creates a link with no expiry and empty optional metadata.
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        original_url: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            original_url: original_url.into(),
            expires_at: None,
            clicks: 0,
            user_id: user_id.into(),
            folder_id: None,
            is_custom: false,
            created_at: Utc::now(),
            title: None,
            description: None,
            favicon: None,
            screenshot: None,
            note: None,
        }
    }

    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Returns true if `expires_at` is set and lies before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_link_creation() {
        let link = Link::new("l1", "abc123", "https://example.com", "u1");

        assert_eq!(link.id, "l1");
        assert_eq!(link.slug, "abc123");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert!(link.expires_at.is_none());
        assert!(!link.is_expired());
    }

    #[test]
    fn test_link_is_expired() {
        let link = Link::new("l1", "code", "https://example.com", "u1")
            .with_expires_at(Utc::now() - Duration::seconds(1));
        assert!(link.is_expired());
    }

    #[test]
    fn test_link_future_expiry_is_live() {
        let link = Link::new("l1", "code", "https://example.com", "u1")
            .with_expires_at(Utc::now() + Duration::hours(1));
        assert!(!link.is_expired());
    }

    #[test]
    fn test_link_expiry_boundary() {
        let at = Utc::now();
        let link = Link::new("l1", "code", "https://example.com", "u1").with_expires_at(at);

        assert!(!link.is_expired_at(at));
        assert!(link.is_expired_at(at + Duration::milliseconds(1)));
    }
}
