//! HTTP middleware components.
//!
//! Every request passes through the same ordered chain, outermost first:
//!
//! 1. fault containment ([`fault`]) - converts panics and internal errors to a
//!    generic 500 and logs them
//! 2. access logging ([`access_log`]) - logs method, path and status
//! 3. authentication ([`auth`]) - rejects requests without the bearer token
//!
//! Containment must stay outermost so it sees faults raised by logging and
//! authentication too. Logging must wrap authentication so rejected requests
//! are still logged with their 401.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

/// Access log middleware
pub mod access_log;
/// Bearer token authentication middleware
pub mod auth;
/// Fault containment middleware
pub mod fault;

use auth::ApiToken;

/// Wrap every route currently on `router` (and its fallback) in the chain.
///
/// Routes added to the returned router afterwards are not wrapped.
pub fn apply<S>(router: Router<S>, token: ApiToken) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(from_fn(fault::contain_faults))
            .layer(CatchPanicLayer::custom(fault::panic_to_fault))
            .layer(from_fn(access_log::log_access))
            .layer(from_fn_with_state(token, auth::require_bearer_token)),
    )
}
