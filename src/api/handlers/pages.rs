//! Plain pages served behind the request gate.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

const NOT_FOUND_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Link not found</title></head>
<body>
<h1>Link not found</h1>
<p>This short link does not exist or has expired.</p>
</body>
</html>
"#;

/// `GET /`
pub async fn index_handler() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))
}

/// Target of the internal rewrite for unknown and expired slugs.
///
/// `GET /not-found` (or the configured `NOT_FOUND_PATH`)
pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}
