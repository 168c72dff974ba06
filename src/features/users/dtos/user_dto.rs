use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::users::models::{User, UserRole};
use crate::shared::constants::{EMAIL_MAX_LEN, PERSON_NAME_MAX_LEN, USERNAME_MAX_LEN};
use crate::shared::validation::validate_username;

/// Response DTO for a user account
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub role: UserRole,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            username: u.username,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            bio: u.bio,
            role: u.role,
        }
    }
}

/// Request DTO for creating a user (admin only)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = USERNAME_MAX_LEN, message = "Username must be 1-150 characters"))]
    #[validate(custom(function = validate_username))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = EMAIL_MAX_LEN, message = "Email must not exceed 254 characters"))]
    pub email: String,

    #[validate(length(max = PERSON_NAME_MAX_LEN, message = "First name must not exceed 150 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = PERSON_NAME_MAX_LEN, message = "Last name must not exceed 150 characters"))]
    pub last_name: Option<String>,

    pub bio: Option<String>,

    #[serde(default)]
    pub role: UserRole,
}

/// Request DTO for updating a user by username (admin only, partial)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = EMAIL_MAX_LEN, message = "Email must not exceed 254 characters"))]
    pub email: Option<String>,

    #[validate(length(max = PERSON_NAME_MAX_LEN, message = "First name must not exceed 150 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = PERSON_NAME_MAX_LEN, message = "Last name must not exceed 150 characters"))]
    pub last_name: Option<String>,

    pub bio: Option<String>,

    pub role: Option<UserRole>,
}

/// Request DTO for the `/v1/users/me/` profile endpoint.
/// Same shape as [`UpdateUserDto`] minus `role`, which a user cannot
/// change on their own account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = EMAIL_MAX_LEN, message = "Email must not exceed 254 characters"))]
    pub email: Option<String>,

    #[validate(length(max = PERSON_NAME_MAX_LEN, message = "First name must not exceed 150 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = PERSON_NAME_MAX_LEN, message = "Last name must not exceed 150 characters"))]
    pub last_name: Option<String>,

    pub bio: Option<String>,
}

impl From<UpdateProfileDto> for UpdateUserDto {
    fn from(dto: UpdateProfileDto) -> Self {
        Self {
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            bio: dto.bio,
            role: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn create_user_rejects_reserved_username() {
        let dto = CreateUserDto {
            username: "Me".to_string(),
            email: "me@example.com".to_string(),
            first_name: None,
            last_name: None,
            bio: None,
            role: UserRole::User,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_user_accepts_plain_account() {
        let dto = CreateUserDto {
            username: "critic_7".to_string(),
            email: "critic@example.com".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            bio: None,
            role: UserRole::Moderator,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_user_rejects_bad_email() {
        let dto = UpdateUserDto {
            email: Some("not-an-email".to_string()),
            first_name: None,
            last_name: None,
            bio: None,
            role: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn profile_update_never_carries_a_role() {
        let dto = UpdateProfileDto {
            email: None,
            first_name: Some("Ada".to_string()),
            last_name: None,
            bio: Some("reviews films".to_string()),
        };
        let update: UpdateUserDto = dto.into();
        assert!(update.role.is_none());
        assert_eq!(update.first_name.as_deref(), Some("Ada"));
    }
}
