//! Bearer token authentication middleware.
//!
//! This middleware intercepts every request to:
//! 1. Let the root path through unchecked
//! 2. Extract the token from the `Authorization: Bearer <token>` header
//! 3. Compare its SHA-256 digest with the digest of the shared secret
//! 4. Reject mismatches with HTTP 401 without calling the next stage

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Path that stays reachable without credentials.
pub const PUBLIC_PATH: &str = "/";

/// The shared secret, kept only as a hex-encoded SHA-256 digest.
#[derive(Debug, Clone)]
pub struct ApiToken {
    token_hash: String,
}

impl ApiToken {
    pub fn new(secret: &str) -> Self {
        Self {
            token_hash: hash_token(secret),
        }
    }

    pub fn matches(&self, presented: &str) -> bool {
        hash_token(presented) == self.token_hash
    }
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Authentication gate.
///
/// # Headers
///
/// Expected header format:
/// ```text
/// Authorization: Bearer TestToken
/// ```
///
/// # Returns
///
/// - the downstream response when the path is public or the token matches
/// - `AppError::Unauthorized` (401) otherwise
pub async fn require_bearer_token(
    State(token): State<ApiToken>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if request.uri().path() == PUBLIC_PATH {
        return Ok(next.run(request).await);
    }

    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    if !token.matches(presented) {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
