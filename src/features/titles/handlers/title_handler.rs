use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::titles::dtos::{CreateTitleDto, TitleResponseDto, UpdateTitleDto};
use crate::features::titles::services::{TitleFilter, TitleService};
use crate::shared::types::{default_page, default_page_size, ApiResponse, Meta, PaginationQuery};

/// Query params for listing titles
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTitlesQuery {
    /// Name substring filter
    pub name: Option<String>,

    /// Exact publication year
    pub year: Option<i32>,

    /// Category slug
    pub category: Option<String>,

    /// Genre slug
    pub genre: Option<String>,

    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

/// List titles with filters (public)
#[utoipa::path(
    get,
    path = "/v1/titles/",
    params(ListTitlesQuery),
    responses(
        (status = 200, description = "List of titles", body = ApiResponse<Vec<TitleResponseDto>>),
    ),
    tag = "titles"
)]
pub async fn list_titles(
    State(service): State<Arc<TitleService>>,
    Query(query): Query<ListTitlesQuery>,
) -> Result<Json<ApiResponse<Vec<TitleResponseDto>>>> {
    let pagination = PaginationQuery {
        page: query.page,
        page_size: query.page_size,
    };
    let filter = TitleFilter {
        name: query.name,
        year: query.year,
        category: query.category,
        genre: query.genre,
    };
    let (titles, total) = service
        .list(&filter, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(titles),
        None,
        Some(Meta { total }),
    )))
}

/// Get a single title (public)
#[utoipa::path(
    get,
    path = "/v1/titles/{title_id}/",
    params(("title_id" = Uuid, Path, description = "Title ID")),
    responses(
        (status = 200, description = "Title details", body = ApiResponse<TitleResponseDto>),
        (status = 404, description = "Title not found")
    ),
    tag = "titles"
)]
pub async fn get_title(
    State(service): State<Arc<TitleService>>,
    Path(title_id): Path<Uuid>,
) -> Result<Json<ApiResponse<TitleResponseDto>>> {
    let title = service.get(title_id).await?;
    Ok(Json(ApiResponse::success(Some(title), None, None)))
}

/// Create a title (admin only)
#[utoipa::path(
    post,
    path = "/v1/titles/",
    request_body = CreateTitleDto,
    responses(
        (status = 201, description = "Title created", body = ApiResponse<TitleResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required")
    ),
    tag = "titles",
    security(("bearer_auth" = []))
)]
pub async fn create_title(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TitleService>>,
    AppJson(dto): AppJson<CreateTitleDto>,
) -> Result<(StatusCode, Json<ApiResponse<TitleResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let title = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(title), None, None)),
    ))
}

/// Partially update a title (admin only)
#[utoipa::path(
    patch,
    path = "/v1/titles/{title_id}/",
    params(("title_id" = Uuid, Path, description = "Title ID")),
    request_body = UpdateTitleDto,
    responses(
        (status = 200, description = "Title updated", body = ApiResponse<TitleResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Title not found")
    ),
    tag = "titles",
    security(("bearer_auth" = []))
)]
pub async fn update_title(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TitleService>>,
    Path(title_id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateTitleDto>,
) -> Result<Json<ApiResponse<TitleResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let title = service.update(title_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(title), None, None)))
}

/// Delete a title (admin only)
#[utoipa::path(
    delete,
    path = "/v1/titles/{title_id}/",
    params(("title_id" = Uuid, Path, description = "Title ID")),
    responses(
        (status = 204, description = "Title deleted"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Title not found")
    ),
    tag = "titles",
    security(("bearer_auth" = []))
)]
pub async fn delete_title(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TitleService>>,
    Path(title_id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete(title_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
