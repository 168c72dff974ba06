use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;

/// Create routes for the auth feature (public)
pub fn routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/v1/auth/signup/", post(handlers::sign_up))
        .route("/v1/auth/token/", post(handlers::get_token))
        .with_state(service)
}
