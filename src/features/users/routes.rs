use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for the users feature.
///
/// `/v1/users/me/` is registered as a static segment, so it wins over the
/// `{username}` routes; the username "me" itself is rejected at sign-up.
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/v1/users/",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/v1/users/me/",
            get(handlers::get_me).patch(handlers::update_me),
        )
        .route(
            "/v1/users/{username}/",
            get(handlers::get_user)
                .patch(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .with_state(service)
}
