//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Validates input and performs one store operation
//! 3. Returns HTTP response (JSON, status code)

/// API documentation endpoint
pub mod docs;
/// Liveness endpoint
pub mod root;
/// User management endpoints
pub mod users;
