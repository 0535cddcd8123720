use std::sync::Arc;

use shared::services::catalog_service::CatalogService;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
}
