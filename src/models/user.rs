//! User data models and API request/response types.
//!
//! This module defines:
//! - `User`: the record held by the store
//! - `UserPayload`: request body for creating and updating users
//! - `UserResponse`: response body returned to clients

use serde::{Deserialize, Serialize};

/// A user record as held by the store.
///
/// Carries no identity of its own; the store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: Option<i64>,
}

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "age": 36
/// }
/// ```
///
/// A missing or `null` name deserializes to `None`, which validation reports
/// as required. Unknown fields, including any client-supplied `id`, are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub age: Option<i64>,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        Self {
            name: payload.name.unwrap_or_default(),
            age: payload.age,
        }
    }
}

/// Response body for user endpoints.
///
/// ```json
/// {
///   "id": 1,
///   "name": "Ada Lovelace",
///   "age": 36
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub age: Option<i64>,
}

impl UserResponse {
    pub fn new(id: u64, user: User) -> Self {
        Self {
            id,
            name: user.name,
            age: user.age,
        }
    }
}
