//! Error types and HTTP error response handling.
//!
//! Expected outcomes (bad input, unknown IDs, missing credentials) are
//! ordinary variants returned by handlers. Everything else is an internal
//! fault: it becomes a 500 whose detail travels on the response as a
//! [`Fault`] extension, so the containment middleware can log it and scrub
//! the body.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::services::validation::ValidationError;
use crate::store::StoreError;

/// Body returned with every 401.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Body returned with every 500. Never carries fault detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Application-wide error type.
///
/// # Status Code Mapping
///
/// - `Validation` / `InvalidBody` → 400 Bad Request
/// - `Unauthorized` → 401 Unauthorized
/// - `NotFound` → 404 Not Found (empty body)
/// - `Internal` → 500 Internal Server Error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A field rule was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body could not be read as a user payload.
    #[error("{0}")]
    InvalidBody(String),

    /// Missing or incorrect bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// The referenced user does not exist.
    #[error("user {0} not found")]
    NotFound(u64),

    /// Anything unexpected. The message is logged, never sent to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(id),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

/// Detail of an unhandled fault, attached to the 500 response it produced.
#[derive(Debug, Clone)]
pub struct Fault(pub String);

/// JSON body of the form `{"error": message}`.
pub fn error_body(message: &str) -> Json<serde_json::Value> {
    Json(json!({ "error": message }))
}

/// Generic 500 carrying the fault detail as an extension.
pub fn fault_response(detail: String) -> Response {
    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_body(INTERNAL_ERROR_MESSAGE),
    )
        .into_response();
    response.extensions_mut().insert(Fault(detail));
    response
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                (StatusCode::BAD_REQUEST, error_body(&err.to_string())).into_response()
            }
            AppError::InvalidBody(message) => {
                (StatusCode::BAD_REQUEST, error_body(&message)).into_response()
            }
            AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, error_body(UNAUTHORIZED_MESSAGE)).into_response()
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            AppError::Internal(detail) => fault_response(detail),
        }
    }
}
