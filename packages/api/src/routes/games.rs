use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::state::AppState;
use shared::models::game::Game;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/games", post(add_game))
        .route("/api/games", get(list_games_by_genre))
}

/// Registers a game. Rejections (non-positive id, duplicate id or title)
/// are silent: the response is 200 either way.
async fn add_game(State(state): State<AppState>, Json(game): Json<Game>) -> StatusCode {
    state.catalog_service.add_game(game).await;
    StatusCode::OK
}

#[derive(Deserialize)]
struct GenreQuery {
    genre: String,
}

async fn list_games_by_genre(
    State(state): State<AppState>,
    Query(query): Query<GenreQuery>,
) -> Json<Vec<Game>> {
    Json(state.catalog_service.games_by_genre(&query.genre).await)
}
