//! Serves the single-page frontend.
//!
//! The page is compiled into the binary with `include_str!`, so the demo
//! ships as one artifact with no asset pipeline.

use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Register the frontend route.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
