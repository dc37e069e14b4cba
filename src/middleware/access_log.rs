//! Access logging middleware.
//!
//! Runs the rest of the chain first, then records one access event with the
//! method, path and final status. Responses carrying a [`Fault`] are left to
//! the containment layer so a fault is logged exactly once.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::error::Fault;

pub async fn log_access(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    if response.extensions().get::<Fault>().is_none() {
        tracing::info!(
            %method,
            %path,
            status = response.status().as_u16(),
            "request completed"
        );
    }

    response
}
