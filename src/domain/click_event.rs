//! Click event captured on the redirect path for asynchronous recording.

use axum::http::{HeaderMap, HeaderName, header};

/// Edge headers carrying the visitor's country, in priority order.
const COUNTRY_HEADERS: &[&str] = &["x-vercel-ip-country", "cf-ipcountry", "x-country-code"];

/// Edge headers carrying the visitor's city, in priority order.
const CITY_HEADERS: &[&str] = &["x-vercel-ip-city", "x-city"];

/// Raw request data needed to build a click record.
///
/// Built on the redirect path by copying a handful of headers, so the
/// response is not delayed by parsing. User-agent parsing and source
/// detection happen later in the click worker
/// (see [`crate::utils::click_metadata`]).
///
/// # Usage Flow
///
/// 1. Created by the request gate for a valid slug
/// 2. Handed to [`crate::application::services::ClickScheduler`] (non-blocking)
/// 3. Processed by [`crate::domain::click_worker::run_click_worker`]
/// 4. Converted to [`crate::domain::entities::NewClick`] for persistence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub link_id: String,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    /// Raw query string of the short-link request (`utm_source=...`).
    pub query: Option<String>,
}

impl ClickEvent {
    /// Captures click data from request headers and the query string.
    pub fn from_request(link_id: impl Into<String>, headers: &HeaderMap, query: Option<&str>) -> Self {
        Self {
            link_id: link_id.into(),
            user_agent: header_value(headers, &header::USER_AGENT),
            referer: header_value(headers, &header::REFERER),
            country: first_header(headers, COUNTRY_HEADERS),
            city: first_header(headers, CITY_HEADERS),
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn first_header(headers: &HeaderMap, names: &[&'static str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| header_value(headers, &HeaderName::from_static(*name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_click_event_from_full_request() {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
        headers.insert(header::REFERER, HeaderValue::from_static("https://google.com"));
        headers.insert("x-vercel-ip-country", HeaderValue::from_static("DE"));
        headers.insert("x-vercel-ip-city", HeaderValue::from_static("Berlin"));

        let event = ClickEvent::from_request("l1", &headers, Some("utm_source=newsletter"));

        assert_eq!(event.link_id, "l1");
        assert_eq!(event.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(event.referer.as_deref(), Some("https://google.com"));
        assert_eq!(event.country.as_deref(), Some("DE"));
        assert_eq!(event.city.as_deref(), Some("Berlin"));
        assert_eq!(event.query.as_deref(), Some("utm_source=newsletter"));
    }

    #[test]
    fn test_click_event_minimal() {
        let event = ClickEvent::from_request("l2", &HeaderMap::new(), None);

        assert_eq!(event.link_id, "l2");
        assert!(event.user_agent.is_none());
        assert!(event.referer.is_none());
        assert!(event.country.is_none());
        assert!(event.query.is_none());
    }

    #[test]
    fn test_country_header_fallback_order() {
        let mut headers = HeaderMap::new();
        headers.insert("cf-ipcountry", HeaderValue::from_static("FR"));
        headers.insert("x-country-code", HeaderValue::from_static("US"));

        let event = ClickEvent::from_request("l3", &headers, None);
        assert_eq!(event.country.as_deref(), Some("FR"));
    }

    #[test]
    fn test_blank_headers_and_query_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("   "));

        let event = ClickEvent::from_request("l4", &headers, Some(""));
        assert!(event.user_agent.is_none());
        assert!(event.query.is_none());
    }
}
