use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

/// Builds the full application router: catalog routes plus health check,
/// wrapped in a permissive CORS layer.
pub fn app(app_state: AppState) -> Router {
    // ToDo: Tighten this up
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::games::routes())
        .merge(routes::users::routes())
        .merge(routes::ratings::routes())
        .layer(cors)
        .with_state(app_state)
}
