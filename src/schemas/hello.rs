//! Request / response types for the hello API (`/api/hello`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body for both `GET` and `POST /api/hello`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    /// The stored message.
    pub message: String,
}

/// Request body for `POST /api/hello`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetMessageRequest {
    /// New message content.  Absent or empty is rejected with 400.
    #[serde(default)]
    pub content: Option<String>,
}
