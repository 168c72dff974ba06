use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::titles::handlers;
use crate::features::titles::services::TitleService;

/// Create routes for the titles feature
///
/// Reads are public; create/update/delete require admin.
pub fn routes(service: Arc<TitleService>) -> Router {
    Router::new()
        .route(
            "/v1/titles/",
            get(handlers::list_titles).post(handlers::create_title),
        )
        .route(
            "/v1/titles/{title_id}/",
            get(handlers::get_title)
                .patch(handlers::update_title)
                .delete(handlers::delete_title),
        )
        .with_state(service)
}
