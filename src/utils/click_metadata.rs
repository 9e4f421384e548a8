//! Click metadata extraction from captured request data.
//!
//! Turns a [`ClickEvent`] into a [`NewClick`]: the user agent is parsed with
//! `woothee`, geo hints come from edge headers, and the traffic source is
//! derived from tracking parameters or the referer host.

use percent_encoding::percent_decode_str;
use url::{Url, form_urlencoded};
use woothee::parser::Parser;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;

/// Query parameters that name a traffic source, in priority order.
const SOURCE_PARAMS: &[&str] = &["utm_source", "ref", "source"];

const DIRECT: &str = "direct";

/// Metadata derived from one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickMetadata {
    pub device: Option<String>,
    pub browser: Option<String>,
    pub os: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub referer: Option<String>,
    pub source: String,
}

/// Extracts click metadata from a captured event.
pub fn extract(event: &ClickEvent) -> ClickMetadata {
    let (device, browser, os) = parse_user_agent(event.user_agent.as_deref());

    ClickMetadata {
        device,
        browser,
        os,
        country: event.country.as_deref().map(|c| c.to_ascii_uppercase()),
        city: event.city.as_deref().and_then(decode_component),
        referer: event.referer.clone(),
        source: detect_source(event.query.as_deref(), event.referer.as_deref()),
    }
}

/// Builds the click record written to the backing store.
pub fn to_new_click(event: &ClickEvent) -> NewClick {
    let meta = extract(event);

    NewClick {
        link_id: event.link_id.clone(),
        device: meta.device,
        browser: meta.browser,
        os: meta.os,
        country: meta.country,
        city: meta.city,
        referer: meta.referer,
        source: meta.source,
    }
}

/// Returns `(device, browser, os)`; `UNKNOWN` values and device categories
/// other than pc, phone or crawler map to `None`.
fn parse_user_agent(ua: Option<&str>) -> (Option<String>, Option<String>, Option<String>) {
    let ua = match ua {
        Some(s) if !s.is_empty() => s,
        _ => return (None, None, None),
    };

    let Some(result) = Parser::new().parse(ua) else {
        return (None, None, None);
    };

    let known = |s: &str| {
        if s.is_empty() || s == "UNKNOWN" {
            None
        } else {
            Some(s.to_string())
        }
    };

    let device = match result.category {
        "pc" => Some("desktop".to_string()),
        "smartphone" | "mobilephone" => Some("mobile".to_string()),
        "crawler" => Some("bot".to_string()),
        _ => None,
    };

    (device, known(result.name), known(result.os))
}

/// Picks the traffic source: tracking parameter, then referer host, then `direct`.
fn detect_source(query: Option<&str>, referer: Option<&str>) -> String {
    if let Some(query) = query {
        let params: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        for name in SOURCE_PARAMS {
            if let Some((_, value)) = params
                .iter()
                .find(|(k, v)| k == name && !v.trim().is_empty())
            {
                return value.trim().to_ascii_lowercase();
            }
        }
    }

    referer
        .and_then(|r| Url::parse(r).ok())
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .map(|host| host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| DIRECT.to_string())
}

/// Percent-decodes a header value such as `S%C3%A3o%20Paulo`.
fn decode_component(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let decoded = percent_decode_str(raw).decode_utf8_lossy().into_owned();
    Some(decoded).filter(|v| !v.is_empty())
}
