//! Capability checks for user-generated content.
//!
//! Reviews and comments share one mutation rule: the author may edit or
//! delete their own entry, and moderators and admins may touch anything.
//! Keeping the rule in a single function avoids the per-resource policy
//! duplication the role checks would otherwise accumulate.

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::CurrentUser;

/// Whether `actor` may modify or delete content owned by `author_id`.
pub fn can_mutate(actor: &CurrentUser, author_id: Uuid) -> bool {
    actor.id == author_id || actor.is_moderator() || actor.is_admin()
}

/// [`can_mutate`] as a guard: returns `Forbidden` on deny.
pub fn ensure_can_mutate(actor: &CurrentUser, author_id: Uuid) -> Result<()> {
    if can_mutate(actor, author_id) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You do not have permission to modify this resource".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::UserRole;

    fn actor(role: UserRole, is_superuser: bool) -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            username: "actor".to_string(),
            email: "actor@example.com".to_string(),
            role,
            is_superuser,
        }
    }

    #[test]
    fn author_can_mutate_own_content() {
        let user = actor(UserRole::User, false);
        assert!(can_mutate(&user, user.id));
    }

    #[test]
    fn plain_user_cannot_mutate_others_content() {
        let user = actor(UserRole::User, false);
        assert!(!can_mutate(&user, Uuid::new_v4()));
        assert!(ensure_can_mutate(&user, Uuid::new_v4()).is_err());
    }

    #[test]
    fn moderator_and_admin_can_mutate_anything() {
        assert!(can_mutate(&actor(UserRole::Moderator, false), Uuid::new_v4()));
        assert!(can_mutate(&actor(UserRole::Admin, false), Uuid::new_v4()));
        assert!(can_mutate(&actor(UserRole::User, true), Uuid::new_v4()));
    }
}
