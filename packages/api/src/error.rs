use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::services::errors::catalog_service_errors::CatalogServiceError;

#[derive(Debug)]
pub enum ApiError {
    Catalog(CatalogServiceError),
}

impl From<CatalogServiceError> for ApiError {
    fn from(error: CatalogServiceError) -> Self {
        ApiError::Catalog(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Catalog(CatalogServiceError::UserNotFound { user_id }) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "User not found", "userId": user_id })),
            )
                .into_response(),
            ApiError::Catalog(CatalogServiceError::GameOrUserNotFound { user_id, game_id }) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Game or user not found",
                    "userId": user_id,
                    "gameId": game_id
                })),
            )
                .into_response(),
            // The ratings view answers 404 with an empty body.
            ApiError::Catalog(CatalogServiceError::RatingsNotFound { .. }) => {
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}
