//! Fault containment.
//!
//! Two cooperating pieces sit at the outer edge of the chain:
//!
//! - [`panic_to_fault`] turns a panic anywhere downstream into a 500 carrying
//!   a [`Fault`] extension (installed through `tower_http`'s `CatchPanicLayer`).
//! - [`contain_faults`] sees every response on the way out. When one carries a
//!   [`Fault`] it logs the method, path and detail once and replaces the
//!   response with the fixed generic body.

use std::any::Any;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{Fault, INTERNAL_ERROR_MESSAGE, error_body, fault_response};

pub async fn contain_faults(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let Some(Fault(detail)) = response.extensions().get::<Fault>().cloned() else {
        return response;
    };

    tracing::error!(%method, %path, fault = %detail, "unhandled fault");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_body(INTERNAL_ERROR_MESSAGE),
    )
        .into_response()
}

/// Panic handler for `CatchPanicLayer::custom`.
pub fn panic_to_fault(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<&str>() {
        format!("panic: {message}")
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("panic: {message}")
    } else {
        "panic with non-string payload".to_string()
    };

    fault_response(detail)
}
