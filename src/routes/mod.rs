//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, per-request trace-ID injection)
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with `HELLO_ENABLE_SWAGGER=false`)
//! - Health / heartbeat route
//! - The embedded single-page frontend at `/`
//! - The hello message API under `/api`

pub mod doc;
mod frontend;
mod health;
mod hello;

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::Router;
use tower::ServiceBuilder;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::{cors_layer, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .merge(health::router())
        .merge(frontend::router())
        .nest("/api", hello::router());

    // Enabled by default; disable with HELLO_ENABLE_SWAGGER=false in
    // production to avoid exposing the API structure.
    if state.config.enable_swagger {
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()));
    }

    app
        // Outermost layers execute first on the way in.
        .layer(ServiceBuilder::new().layer(cors_layer(state.clone())))
        .layer(from_fn_with_state(state.clone(), trace::trace_middleware))
        .with_state(state)
}
