//! Root endpoint used for liveness checks.

use axum::Json;

/// Fixed message served at `/`. Reachable without credentials.
pub const ROOT_BODY: &str = "Root path";

/// Responds with the message as a JSON string.
pub async fn root() -> Json<&'static str> {
    Json(ROOT_BODY)
}
