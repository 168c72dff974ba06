#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::auth::model::CurrentUser;
#[cfg(test)]
use crate::features::users::models::UserRole;

#[cfg(test)]
pub fn create_test_user(role: UserRole) -> CurrentUser {
    CurrentUser {
        id: Uuid::new_v4(),
        username: format!("test-{}", role.as_str()),
        email: format!("{}@example.com", role.as_str()),
        role,
        is_superuser: false,
    }
}

/// Wraps a router with middleware that injects `user` as the authenticated
/// caller, standing in for the bearer-token middleware in tests.
#[cfg(test)]
pub fn with_auth(router: Router, user: CurrentUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                let response: Response = next.run(request).await;
                response
            }
        },
    ))
}
