use std::sync::Arc;

use api::state::AppState;
use shared::repositories::catalog_repository::InMemoryCatalogRepository;
use shared::services::catalog_service::CatalogService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Set up services
    let repository = Arc::new(InMemoryCatalogRepository::new());
    let catalog_service = Arc::new(CatalogService::new(repository));
    let app = api::app(AppState { catalog_service });

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
