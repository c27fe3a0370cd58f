//! Handlers for user management endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::user::{MessageResponse, UserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Returns a single user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not an integer.
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let Path(id) = path?;
    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Creates a user and assigns it the next id.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "name": "X", "email": "x@y.com", "role": "QA" }
/// ```
///
/// Responds with `201 Created`, the stored user and a `Location: /users/{id}` header.
///
/// # Errors
///
/// Returns 400 if the body is malformed, `name`/`email` is blank, or `email` lacks `@`.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let user = state.user_service.create_user(payload.into()).await?;

    let location = format!("/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

/// Replaces name, email and role of a user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Errors
///
/// Returns 400 if the id or body is malformed, or `name`/`email` is blank.
/// Returns 404 if the user does not exist.
pub async fn update_user_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    state.user_service.update_user(id, payload.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn delete_user_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    state.user_service.delete_user(id).await?;

    Ok(Json(MessageResponse {
        message: format!("User {id} deleted successfully."),
    }))
}
