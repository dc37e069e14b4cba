//! User management HTTP handlers.
//!
//! This module implements the user CRUD endpoints:
//! - POST /users - Create a user
//! - GET /users - List all users
//! - GET /users/{id} - Get a user by ID
//! - PUT /users/{id} - Replace a user
//! - DELETE /users/{id} - Delete a user
//!
//! Each handler is a single synchronous transaction against the store.
//! Validation runs before any store access, so a rejected payload never
//! touches stored state.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::user::{User, UserPayload, UserResponse},
    services::validation::validate_user,
    store::SharedStore,
};

/// Create a new user.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "age": 36
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the stored user, with `Location: /users/{id}`
/// - **Error (400)**: a field rule was violated or the body is not valid JSON
pub async fn create_user(
    State(store): State<SharedStore>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    validate_user(&payload)?;

    let user: User = payload.into();
    let id = store.create(user.clone())?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{id}"))],
        Json(UserResponse::new(id, user)),
    ))
}

/// List every user, ordered by ID.
pub async fn list_users(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users: Vec<UserResponse> = store
        .list()?
        .into_iter()
        .map(|(id, user)| UserResponse::new(id, user))
        .collect();

    Ok(Json(users))
}

/// Get a user by ID.
///
/// # Response
///
/// - **Success (200 OK)**: the user
/// - **Error (404)**: no user with that ID, empty body
pub async fn get_user(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = store.get(id)?;

    Ok(Json(UserResponse::new(id, user)))
}

/// Replace a user wholesale.
///
/// Any `id` field in the body is ignored; the path ID is authoritative.
///
/// # Response
///
/// - **Success (200 OK)**: the updated user
/// - **Error (400)**: a field rule was violated
/// - **Error (404)**: no user with that ID; nothing is inserted
pub async fn update_user(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Json(payload) = payload?;
    validate_user(&payload)?;

    let user: User = payload.into();
    store.update(id, user.clone())?;

    Ok(Json(UserResponse::new(id, user)))
}

/// Delete a user. Returns 204 on success, 404 if the ID is unknown.
pub async fn delete_user(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    store.delete(id)?;

    Ok(StatusCode::NO_CONTENT)
}
