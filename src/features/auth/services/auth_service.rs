use chrono::Utc;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    GetTokenRequestDto, SignUpRequestDto, SignUpResponseDto, TokenResponseDto,
};
use crate::features::auth::services::{ConfirmationCodes, TokenService};
use crate::features::users::services::UserService;
use crate::modules::mailer::Mailer;

/// Service for the sign-up / token-exchange flow
pub struct AuthService {
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
    codes: ConfirmationCodes,
    mailer: Arc<Mailer>,
}

impl AuthService {
    pub fn new(
        users: Arc<UserService>,
        tokens: Arc<TokenService>,
        codes: ConfirmationCodes,
        mailer: Arc<Mailer>,
    ) -> Self {
        Self {
            users,
            tokens,
            codes,
            mailer,
        }
    }

    /// Get-or-create the account for the submitted (username, email) pair and
    /// dispatch a confirmation code. Idempotent for a matching pair.
    pub async fn sign_up(&self, dto: SignUpRequestDto) -> Result<SignUpResponseDto> {
        let user = self
            .users
            .get_or_create_for_signup(&dto.username, &dto.email)
            .await?;

        let code = self.codes.make_code(&user, Utc::now());
        self.mailer
            .send_confirmation_code(&user.email, &user.username, &code)
            .await?;

        Ok(SignUpResponseDto {
            username: user.username,
            email: user.email,
        })
    }

    /// Exchange a (username, confirmation code) pair for an access token.
    /// Unknown usernames are a 404; a bad or expired code is a field-level
    /// validation error.
    pub async fn get_token(&self, dto: GetTokenRequestDto) -> Result<TokenResponseDto> {
        let user = self.users.get_by_username(&dto.username).await?;

        if !self
            .codes
            .check_code(&user, &dto.confirmation_code, Utc::now())
        {
            return Err(AppError::Validation(
                "confirmation_code: invalid or expired confirmation code".to_string(),
            ));
        }

        let token = self.tokens.issue_access_token(&user)?;
        tracing::info!("Access token issued: username={}", user.username);
        Ok(TokenResponseDto { token })
    }
}
