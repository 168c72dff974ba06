use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::comments::handlers;
use crate::features::comments::services::CommentService;

/// Create routes for the comments feature
///
/// Reads are public; posting needs authentication, and edits are limited
/// to the author, moderators and admins.
pub fn routes(service: Arc<CommentService>) -> Router {
    Router::new()
        .route(
            "/v1/titles/{title_id}/reviews/{review_id}/comments/",
            get(handlers::list_comments).post(handlers::create_comment),
        )
        .route(
            "/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}/",
            get(handlers::get_comment)
                .patch(handlers::update_comment)
                .delete(handlers::delete_comment),
        )
        .with_state(service)
}
