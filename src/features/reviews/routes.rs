use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reviews::handlers;
use crate::features::reviews::services::ReviewService;

/// Create routes for the reviews feature
///
/// Reads are public; posting needs authentication, and edits are limited
/// to the author, moderators and admins.
pub fn routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route(
            "/v1/titles/{title_id}/reviews/",
            get(handlers::list_reviews).post(handlers::create_review),
        )
        .route(
            "/v1/titles/{title_id}/reviews/{review_id}/",
            get(handlers::get_review)
                .patch(handlers::update_review)
                .delete(handlers::delete_review),
        )
        .with_state(service)
}
