use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{
    GetTokenRequestDto, SignUpRequestDto, SignUpResponseDto, TokenResponseDto,
};
use crate::features::auth::services::AuthService;

/// Sign up with a username and email
///
/// Creates the account if needed and emails a confirmation code. Submitting
/// the same (username, email) pair again resends the code.
#[utoipa::path(
    post,
    path = "/v1/auth/signup/",
    request_body = SignUpRequestDto,
    responses(
        (status = 200, description = "Confirmation code sent", body = SignUpResponseDto),
        (status = 400, description = "Validation error or identity conflict")
    ),
    tag = "auth"
)]
pub async fn sign_up(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<SignUpRequestDto>,
) -> Result<Json<SignUpResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.sign_up(dto).await?;
    Ok(Json(response))
}

/// Exchange a confirmation code for an access token
#[utoipa::path(
    post,
    path = "/v1/auth/token/",
    request_body = GetTokenRequestDto,
    responses(
        (status = 200, description = "Access token issued", body = TokenResponseDto),
        (status = 400, description = "Invalid confirmation code"),
        (status = 404, description = "User not found")
    ),
    tag = "auth"
)]
pub async fn get_token(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<GetTokenRequestDto>,
) -> Result<Json<TokenResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.get_token(dto).await?;
    Ok(Json(response))
}
