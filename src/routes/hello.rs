//! Hello message routes (`/api/hello` and the legacy `/api/` stub).

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::info;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::schemas::hello::{HelloResponse, SetMessageRequest};
use crate::service::HelloService;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(get_hello, set_hello),
    components(schemas(HelloResponse, SetMessageRequest))
)]
pub struct HelloApi;

/// Register hello routes.  Nested under `/api` by [`crate::routes::build`].
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/hello", get(get_hello).post(set_hello))
        .route("/", get(legacy_root))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// Read the stored message (`GET /api/hello`).
///
/// A first read against an empty table persists and returns the default
/// content, so this endpoint never returns an empty message.
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "hello",
    responses(
        (status = 200, description = "The stored message", body = HelloResponse),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn get_hello(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HelloResponse>, ServerError> {
    let service = HelloService::new(state.store.as_ref());
    let message = service.get_message().await?;
    Ok(Json(HelloResponse { message }))
}

/// Replace the stored message (`POST /api/hello`).
///
/// Body: `{ "content": "Your message here" }`.  Content is trimmed before
/// storage; absent, empty, or whitespace-only content is rejected with 400
/// and leaves the stored message untouched.
#[utoipa::path(
    post,
    path = "/api/hello",
    tag = "hello",
    request_body = SetMessageRequest,
    responses(
        (status = 200, description = "The message as stored", body = HelloResponse),
        (status = 400, description = "Missing or empty content"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn set_hello(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetMessageRequest>,
) -> Result<Json<HelloResponse>, ServerError> {
    let content = match req.content.as_deref() {
        Some(c) if !c.is_empty() => c,
        _ => return Err(ServerError::BadRequest("Content is required".into())),
    };

    let service = HelloService::new(state.store.as_ref());
    let message = service.set_message(content).await?;

    info!(len = message.len(), "message updated");
    Ok(Json(HelloResponse { message }))
}

/// Legacy endpoint for backward compatibility (`GET /api/`).
///
/// Early clients of the original scaffold probe this route; the payload is
/// frozen.
pub async fn legacy_root() -> Json<Value> {
    Json(json!({ "name": "Cloudflare" }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::sqlite::SqliteStore;
    use crate::db::DEFAULT_MESSAGE;

    /// Application state over a named shared-cache in-memory database, so
    /// every pool connection sees the same rows.  Names must be unique per
    /// test because the process shares the in-memory namespace.
    async fn test_state(name: &str) -> Arc<AppState> {
        let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
        let store = SqliteStore::connect(&url).await.expect("open test store");
        Arc::new(AppState {
            config: Arc::new(Config::from_env()),
            store: Arc::new(store),
        })
    }

    async fn read(state: &Arc<AppState>) -> String {
        let Json(body) = get_hello(State(Arc::clone(state))).await.expect("get");
        body.message
    }

    fn set_request(content: Option<&str>) -> Json<SetMessageRequest> {
        Json(SetMessageRequest {
            content: content.map(str::to_owned),
        })
    }

    #[tokio::test]
    async fn get_synthesizes_a_stable_default() {
        let state = test_state("routes_default").await;
        let first = read(&state).await;
        assert_eq!(first, DEFAULT_MESSAGE);
        assert_eq!(read(&state).await, first);
    }

    #[tokio::test]
    async fn post_then_get_reflects_the_write() {
        let state = test_state("routes_write").await;
        let Json(body) = set_hello(State(Arc::clone(&state)), set_request(Some("X")))
            .await
            .expect("post");
        assert_eq!(body.message, "X");
        assert_eq!(read(&state).await, "X");
    }

    #[tokio::test]
    async fn post_trims_whitespace() {
        let state = test_state("routes_trim").await;
        let Json(body) = set_hello(State(Arc::clone(&state)), set_request(Some("  X  ")))
            .await
            .expect("post");
        assert_eq!(body.message, "X");
        assert_eq!(read(&state).await, "X");
    }

    #[tokio::test]
    async fn missing_content_is_rejected_without_a_write() {
        let state = test_state("routes_missing").await;
        let err = set_hello(State(Arc::clone(&state)), set_request(None))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));
        assert!(err.to_string().contains("Content is required"));

        // The store was never touched: a read still synthesizes the default.
        assert_eq!(read(&state).await, DEFAULT_MESSAGE);
    }

    #[tokio::test]
    async fn empty_content_is_rejected_without_a_write() {
        let state = test_state("routes_empty").await;
        set_hello(State(Arc::clone(&state)), set_request(Some("keep me")))
            .await
            .expect("seed");

        let err = set_hello(State(Arc::clone(&state)), set_request(Some("")))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));

        let err = set_hello(State(Arc::clone(&state)), set_request(Some("   ")))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));

        assert_eq!(read(&state).await, "keep me");
    }

    #[tokio::test]
    async fn last_writer_wins() {
        let state = test_state("routes_last_writer").await;
        set_hello(State(Arc::clone(&state)), set_request(Some("first")))
            .await
            .expect("first post");
        set_hello(State(Arc::clone(&state)), set_request(Some("second")))
            .await
            .expect("second post");
        assert_eq!(read(&state).await, "second");
    }

    #[tokio::test]
    async fn legacy_root_payload_is_frozen() {
        let Json(body) = legacy_root().await;
        assert_eq!(body["name"], "Cloudflare");
    }
}
