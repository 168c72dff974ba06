use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::Claims;
use crate::features::users::models::User;

const TOKEN_TYPE_ACCESS: &str = "access";

/// Issues and validates HS256 access tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            access_token_ttl_secs: config.access_token_ttl.as_secs() as i64,
        }
    }

    /// Sign an access token for `user`
    pub fn issue_access_token(&self, user: &User) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            token_type: TOKEN_TYPE_ACCESS.to_string(),
            iat: now,
            exp: now + self.access_token_ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign access token: {}", e)))
    }

    /// Validate a bearer token and return the user id it was issued for
    pub fn validate_access_token(&self, token: &str) -> Result<Uuid> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        if data.claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(AppError::Unauthorized("Invalid token type".to_string()));
        }

        Uuid::parse_str(&data.claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::UserRole;
    use std::time::Duration;

    fn config(ttl_secs: u64) -> AuthConfig {
        AuthConfig {
            token_secret: "a-test-secret-of-sufficient-length".to_string(),
            access_token_ttl: Duration::from_secs(ttl_secs),
            confirmation_code_ttl: Duration::from_secs(3600),
        }
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            bio: String::new(),
            role: UserRole::User,
            is_superuser: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_validates_to_user_id() {
        let service = TokenService::new(&config(3600));
        let user = test_user();
        let token = service.issue_access_token(&user).unwrap();
        assert_eq!(service.validate_access_token(&token).unwrap(), user.id);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let service = TokenService::new(&config(3600));
        let other = TokenService::new(&AuthConfig {
            token_secret: "another-secret-also-long-enough!".to_string(),
            access_token_ttl: Duration::from_secs(3600),
            confirmation_code_ttl: Duration::from_secs(3600),
        });
        let token = other.issue_access_token(&test_user()).unwrap();
        assert!(service.validate_access_token(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = TokenService::new(&config(3600));
        assert!(service.validate_access_token("not.a.jwt").is_err());
        assert!(service.validate_access_token("").is_err());
    }
}
