use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::genres::dtos::{CreateGenreDto, GenreResponseDto};
use crate::features::genres::services::GenreService;
use crate::shared::types::{default_page, default_page_size, ApiResponse, Meta, PaginationQuery};

/// Query params for listing genres
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListGenresQuery {
    /// Name substring filter
    pub search: Option<String>,

    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

/// List genres (public)
#[utoipa::path(
    get,
    path = "/v1/genres/",
    params(ListGenresQuery),
    responses(
        (status = 200, description = "List of genres", body = ApiResponse<Vec<GenreResponseDto>>),
    ),
    tag = "genres"
)]
pub async fn list_genres(
    State(service): State<Arc<GenreService>>,
    Query(query): Query<ListGenresQuery>,
) -> Result<Json<ApiResponse<Vec<GenreResponseDto>>>> {
    let pagination = PaginationQuery {
        page: query.page,
        page_size: query.page_size,
    };
    let (genres, total) = service
        .list(query.search.as_deref(), pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(genres),
        None,
        Some(Meta { total }),
    )))
}

/// Create a genre (admin only)
#[utoipa::path(
    post,
    path = "/v1/genres/",
    request_body = CreateGenreDto,
    responses(
        (status = 201, description = "Genre created", body = ApiResponse<GenreResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required")
    ),
    tag = "genres",
    security(("bearer_auth" = []))
)]
pub async fn create_genre(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<GenreService>>,
    AppJson(dto): AppJson<CreateGenreDto>,
) -> Result<(StatusCode, Json<ApiResponse<GenreResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let genre = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(genre), None, None)),
    ))
}

/// Delete a genre by slug (admin only)
///
/// Titles lose the genre tag but are otherwise untouched.
#[utoipa::path(
    delete,
    path = "/v1/genres/{slug}/",
    params(("slug" = String, Path, description = "Genre slug")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Genre not found")
    ),
    tag = "genres",
    security(("bearer_auth" = []))
)]
pub async fn delete_genre(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<GenreService>>,
    Path(slug): Path<String>,
) -> Result<StatusCode> {
    service.delete_by_slug(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
