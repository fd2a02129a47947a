//! HTTP Handlers
//!
//! The only layer that turns a `UserError` into a status code. Bodies are
//! read as raw bytes so that a missing or malformed body reports the same
//! `{error, message}` shape as every other failure.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::error::app_error::AppError;
use serde::de::DeserializeOwned;

use crate::application::UserContext;
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};
use crate::presentation::dto::{
    CreateUserRequest, HealthResponse, UpdateUserRequest, UserResponse,
};

/// Shared state for user handlers
pub struct UsersAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub ctx: UserContext<R>,
}

impl<R> Clone for UsersAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
        }
    }
}

// ============================================================================
// Health
// ============================================================================

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// ============================================================================
// Users
// ============================================================================

/// POST /users
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    body: Bytes,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let req: CreateUserRequest = decode_body(&body)?;
    let user = state.ctx.create_user().execute(req.into()).await?;

    Ok(Json(user.into()))
}

/// GET /users/{user_id}
pub async fn get_user<R>(
    State(state): State<UsersAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user_id = user_id_from_path(path)?;
    let user = state.ctx.get_user().execute(&user_id).await?;

    Ok(Json(user.into()))
}

/// PUT /users/{user_id}
pub async fn update_user<R>(
    State(state): State<UsersAppState<R>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user_id = user_id_from_path(path)?;
    let req: UpdateUserRequest = decode_body(&body)?;
    let user = state
        .ctx
        .update_user()
        .execute(req.into_input(user_id))
        .await?;

    Ok(Json(user.into()))
}

/// DELETE /users/{user_id}
pub async fn delete_user<R>(
    State(state): State<UsersAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> UserResult<StatusCode>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user_id = user_id_from_path(path)?;
    state.ctx.delete_user().execute(&user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unknown routes
pub async fn route_not_found() -> impl IntoResponse {
    AppError::not_found("Route not found")
}

// ============================================================================
// Helpers
// ============================================================================

fn decode_body<T: DeserializeOwned>(body: &Bytes) -> UserResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(UserError::Validation("Request body is required".to_string()));
    }

    serde_json::from_slice(body)
        .map_err(|e| UserError::Validation(format!("Invalid request body: {}", e)))
}

/// Axum has already percent-decoded the segment.
fn user_id_from_path(path: Result<Path<String>, PathRejection>) -> UserResult<String> {
    path.map(|Path(user_id)| user_id).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected userId path parameter");
        UserError::Validation("userId path parameter is invalid".to_string())
    })
}
