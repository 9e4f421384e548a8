//! Click record written once per successful redirect.

/// Input data for recording a click.
///
/// Produced by the click worker from a [`crate::domain::click_event::ClickEvent`]
/// after metadata extraction. Never read back by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClick {
    pub link_id: String,
    pub device: Option<String>,
    pub browser: Option<String>,
    pub os: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub referer: Option<String>,
    /// Traffic source; `"direct"` when nothing better is known.
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_click_creation() {
        let new_click = NewClick {
            link_id: "l99".to_string(),
            device: Some("mobile".to_string()),
            browser: Some("Safari".to_string()),
            os: None,
            country: Some("DE".to_string()),
            city: None,
            referer: None,
            source: "direct".to_string(),
        };

        assert_eq!(new_click.link_id, "l99");
        assert!(new_click.device.is_some());
        assert!(new_click.os.is_none());
        assert_eq!(new_click.source, "direct");
    }
}
