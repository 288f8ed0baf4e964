//! User endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, UserPayload, UserResponse};

/// Routes mounted under `/api/users`
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{user_id}",
            get(get_user).put(replace_user).delete(delete_user),
        )
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!("Creating user");

    let record = state.user_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&record))))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Listing users");

    let records = state.user_service.list().await?;

    Ok(Json(records.iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let record = state
        .user_service
        .get(&user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User '{}' not found", user_id)))?;

    Ok(Json(UserResponse::from(&record)))
}

/// PUT /api/users/{user_id}
pub async fn replace_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Replacing user");

    let record = state.user_service.replace(&user_id, payload.into()).await?;

    Ok(Json(UserResponse::from(&record)))
}

/// DELETE /api/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Deleting user");

    let record = state.user_service.delete(&user_id).await?;

    Ok(Json(UserResponse::from(&record)))
}
