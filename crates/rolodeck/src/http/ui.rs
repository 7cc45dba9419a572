//! Embedded browser client.
//!
//! The page, script, and stylesheet are compiled into the binary so the
//! service ships as a single self-contained executable.

use axum::http::header;
use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const APP_JS: &str = include_str!("../../assets/app.js");
const STYLE_CSS: &str = include_str!("../../assets/style.css");

/// Serve the contact page at `/`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Serve the client script at `/assets/app.js`.
pub async fn app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], APP_JS)
}

/// Serve the stylesheet at `/assets/style.css`.
pub async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLE_CSS)
}
