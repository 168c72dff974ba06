use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::constants::{EMAIL_MAX_LEN, USERNAME_MAX_LEN};
use crate::shared::validation::validate_username;

/// Request DTO for sign-up
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignUpRequestDto {
    #[validate(length(min = 1, max = USERNAME_MAX_LEN, message = "Username must be 1-150 characters"))]
    #[validate(custom(function = validate_username))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = EMAIL_MAX_LEN, message = "Email must not exceed 254 characters"))]
    pub email: String,
}

/// Response DTO for sign-up: echoes the accepted pair
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignUpResponseDto {
    pub username: String,
    pub email: String,
}

/// Request DTO for exchanging a confirmation code for an access token
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GetTokenRequestDto {
    #[validate(length(min = 1, max = USERNAME_MAX_LEN, message = "Username must be 1-150 characters"))]
    #[validate(custom(function = validate_username))]
    pub username: String,

    #[validate(length(min = 1, message = "Confirmation code is required"))]
    pub confirmation_code: String,
}

/// Response DTO for token issuance
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponseDto {
    /// Signed access token (HS256 JWT)
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_rejects_me_username() {
        let dto = SignUpRequestDto {
            username: "ME".to_string(),
            email: "me@example.com".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn signup_rejects_invalid_email() {
        let dto = SignUpRequestDto {
            username: "reader".to_string(),
            email: "reader-at-example".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn token_request_requires_code() {
        let dto = GetTokenRequestDto {
            username: "reader".to_string(),
            confirmation_code: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}
