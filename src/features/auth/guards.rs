//! Role-based authorization guards.
//!
//! Handlers that only admins may call take [`RequireAdmin`] instead of a
//! plain [`CurrentUser`]; the guard rejects with 401 when no user was
//! authenticated and 403 when the user lacks the role.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::core::error::AppError;
use crate::features::auth::model::CurrentUser;

/// Guard for endpoints restricted to admins (role `admin` or superuser).
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<CurrentUser>()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    use super::*;
    use crate::features::users::models::UserRole;
    use crate::shared::test_helpers::{create_test_user, with_auth};

    async fn admin_only(RequireAdmin(user): RequireAdmin) -> String {
        user.username
    }

    fn router() -> Router {
        Router::new().route("/restricted", get(admin_only))
    }

    #[tokio::test]
    async fn rejects_unauthenticated_with_401() {
        let server = TestServer::new(router()).unwrap();
        let response = server.get("/restricted").await;
        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn rejects_plain_user_with_403() {
        let app = with_auth(router(), create_test_user(UserRole::User));
        let server = TestServer::new(app).unwrap();
        let response = server.get("/restricted").await;
        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn rejects_moderator_with_403() {
        let app = with_auth(router(), create_test_user(UserRole::Moderator));
        let server = TestServer::new(app).unwrap();
        let response = server.get("/restricted").await;
        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn allows_admin_and_superuser() {
        let app = with_auth(router(), create_test_user(UserRole::Admin));
        let server = TestServer::new(app).unwrap();
        server.get("/restricted").await.assert_status_ok();

        let mut superuser = create_test_user(UserRole::User);
        superuser.is_superuser = true;
        let app = with_auth(router(), superuser);
        let server = TestServer::new(app).unwrap();
        server.get("/restricted").await.assert_status_ok();
    }
}
