//! Root page and the content-negotiated 404 fallback.

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const NOT_FOUND_HTML: &str = include_str!("../../assets/404.html");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundFormat {
    Html,
    Json,
    Text,
}

/// Whether an `Accept` header admits `kind/subtype`. Entries with `q=0` are
/// refusals. No header means anything is acceptable.
fn accepts(accept: Option<&str>, kind: &str, subtype: &str) -> bool {
    let Some(accept) = accept else {
        return true;
    };

    accept.split(',').any(|entry| {
        let mut parts = entry.split(';').map(str::trim);
        let media = parts.next().unwrap_or_default().to_ascii_lowercase();
        let refused = parts.any(|p| {
            p.strip_prefix("q=")
                .and_then(|q| q.trim().parse::<f32>().ok())
                .map(|q| q <= 0.0)
                .unwrap_or(false)
        });
        if refused {
            return false;
        }
        let (k, s) = media.split_once('/').unwrap_or((media.as_str(), ""));
        (k == "*" || k == kind) && (s == "*" || s == subtype)
    })
}

pub fn negotiate_not_found(headers: &HeaderMap) -> NotFoundFormat {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    if accepts(accept, "text", "html") {
        NotFoundFormat::Html
    } else if accepts(accept, "application", "json") {
        NotFoundFormat::Json
    } else {
        NotFoundFormat::Text
    }
}

/// GET / - API index page
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Fallback for every unmatched route
pub async fn not_found_handler(headers: HeaderMap) -> Response {
    match negotiate_not_found(&headers) {
        NotFoundFormat::Html => (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response(),
        NotFoundFormat::Json => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "404 Not Found" })),
        )
            .into_response(),
        NotFoundFormat::Text => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            "404 Not Found",
        )
            .into_response(),
    }
}
