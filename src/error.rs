//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with an appropriate status code.
//!
//! **Security note:** Internal errors are logged with full detail but only a
//! generic message is returned to the caller so that file paths, SQL, or
//! other implementation details never leak to clients.  The one deliberate
//! exception is the missing-schema case, where the caller gets an
//! operator-actionable migration hint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::db::StoreError;
use crate::service::ServiceError;

/// All errors that can occur in the hello-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Propagated from the message store.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            // Client-facing errors: expose the message directly.
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),

            // Missing schema: the operator can act on this, so say so.
            ServerError::Store(StoreError::SchemaMissing) => {
                error!("messages table is missing");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database table not found. Please run migrations.".to_owned(),
                )
            }

            // Other internal errors: log the full detail, return a generic
            // message.
            ServerError::Store(StoreError::Database(e)) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
            ServerError::Internal(m) => {
                error!(message = %m, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

impl From<ServiceError> for ServerError {
    fn from(e: ServiceError) -> Self {
        match e {
            // Empty-after-trim is the caller's fault, same as a missing
            // field, so it maps to 400.
            ServiceError::EmptyContent => ServerError::BadRequest(e.to_string()),
            ServiceError::Store(inner) => ServerError::Store(inner),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("parse body")
    }

    #[tokio::test]
    async fn bad_request_exposes_message() {
        let response = ServerError::BadRequest("Content is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Content is required");
    }

    #[tokio::test]
    async fn schema_missing_surfaces_migration_hint() {
        let response = ServerError::Store(StoreError::SchemaMissing).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        let message = body["error"].as_str().expect("error string");
        assert!(message.contains("migrations"), "got: {message}");
    }

    #[tokio::test]
    async fn generic_database_errors_stay_generic() {
        let err = ServerError::Store(StoreError::Database(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        // Distinguishable from the migration hint.
        assert_eq!(body["error"], "internal server error");
    }

    #[tokio::test]
    async fn empty_content_converts_to_bad_request() {
        let err: ServerError = ServiceError::EmptyContent.into();
        assert!(matches!(err, ServerError::BadRequest(_)));
    }
}
