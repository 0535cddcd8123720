use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::user::User;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(add_user))
        .route("/api/users", get(list_users))
        .route("/api/users/{user_id}", put(update_user))
}

async fn add_user(State(state): State<AppState>, Json(user): Json<User>) -> StatusCode {
    state.catalog_service.add_user(user).await;
    StatusCode::OK
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.catalog_service.list_users().await)
}

/// Renames a user. The new name arrives as the raw request body.
async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    new_name: String,
) -> Result<StatusCode, ApiError> {
    state
        .catalog_service
        .rename_user(user_id, &new_name)
        .await
        .map_err(|e| {
            error!("Failed to rename user {}: {}", user_id, e);
            ApiError::from(e)
        })?;
    debug!("User renamed successfully: {}", user_id);
    Ok(StatusCode::OK)
}
