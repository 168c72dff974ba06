use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::genres::handlers;
use crate::features::genres::services::GenreService;

/// Create routes for the genres feature
///
/// Listing is public; create/delete require admin.
pub fn routes(service: Arc<GenreService>) -> Router {
    Router::new()
        .route(
            "/v1/genres/",
            get(handlers::list_genres).post(handlers::create_genre),
        )
        .route("/v1/genres/{slug}/", delete(handlers::delete_genre))
        .with_state(service)
}
