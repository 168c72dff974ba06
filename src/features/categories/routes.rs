use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
///
/// Listing is public; create/delete require admin.
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/v1/categories/",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route("/v1/categories/{slug}/", delete(handlers::delete_category))
        .with_state(service)
}
