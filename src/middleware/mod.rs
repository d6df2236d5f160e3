//! HTTP middleware stack.

pub mod trace;

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// CORS layer for the API.
///
/// With `HELLO_CORS_ORIGINS` unset every origin is allowed, which suits the
/// local demo; set a comma-separated allow-list in any shared deployment.
pub fn cors_layer(state: Arc<AppState>) -> CorsLayer {
    if let Some(origins_str) = &state.config.cors_allowed_origins {
        let origins: Vec<axum::http::HeaderValue> = origins_str
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        if !origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(origins)
                .allow_headers(Any)
                .allow_methods(Any);
        }
    }
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
}
