//! HTTP middleware configuration

use axum::{
    body::Body,
    extract::Path,
    http::Request,
    middleware::Next,
    response::Response,
};
use statefacts_core::api::{HttpServerConfig, StateCode};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer};
use tracing::{debug, info, warn};

use super::models::HttpServerError;

/// Build the middleware stack
pub fn create_middleware_stack(
    config: &HttpServerConfig,
) -> tower::layer::util::Stack<CorsLayer, TimeoutLayer> {
    tower::layer::util::Stack::new(
        create_cors_layer(config.cors_enabled),
        create_timeout_layer(config.request_timeout_secs),
    )
}

/// CORS: permissive when enabled, otherwise no origin is allowed
fn create_cors_layer(enabled: bool) -> CorsLayer {
    if enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}

fn create_timeout_layer(secs: u64) -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_secs(secs))
}

/// State Validator: normalizes the `:state` path parameter, rejects unknown
/// codes with 400, and hands the resolved [`StateCode`] to the handler as a
/// request extension.
pub async fn verify_state(
    Path(params): Path<HashMap<String, String>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, HttpServerError> {
    let code = StateCode::from_param(params.get("state").map(String::as_str))?;
    debug!(state = %code, "State parameter verified");
    req.extensions_mut().insert(code);
    Ok(next.run(req).await)
}

/// Request logging middleware
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    }

    response
}
