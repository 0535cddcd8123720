use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/ratings", post(rate_game))
        .route("/api/ratings/{user_id}", get(list_ratings_by_user))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RateGameQuery {
    user_id: i32,
    game_id: i32,
    rating: i32,
}

async fn rate_game(
    State(state): State<AppState>,
    Query(query): Query<RateGameQuery>,
) -> Result<StatusCode, ApiError> {
    state
        .catalog_service
        .rate_game(query.user_id, query.game_id, query.rating)
        .await
        .map_err(|e| {
            error!(
                "Failed to rate game {} for user {}: {}",
                query.game_id, query.user_id, e
            );
            ApiError::from(e)
        })?;
    Ok(StatusCode::OK)
}

async fn list_ratings_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<HashMap<String, i32>>, ApiError> {
    state
        .catalog_service
        .ratings_for_user(user_id)
        .await
        .map(Json)
        .map_err(ApiError::from)
}
