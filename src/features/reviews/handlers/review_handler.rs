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
use crate::features::auth::model::CurrentUser;
use crate::features::reviews::dtos::{CreateReviewDto, ReviewResponseDto, UpdateReviewDto};
use crate::features::reviews::services::ReviewService;
use crate::shared::types::{default_page, default_page_size, ApiResponse, Meta, PaginationQuery};

/// Query params for listing reviews
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListReviewsQuery {
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

/// List reviews for a title (public)
#[utoipa::path(
    get,
    path = "/v1/titles/{title_id}/reviews/",
    params(
        ("title_id" = Uuid, Path, description = "Title ID"),
        ListReviewsQuery
    ),
    responses(
        (status = 200, description = "List of reviews", body = ApiResponse<Vec<ReviewResponseDto>>),
        (status = 404, description = "Title not found")
    ),
    tag = "reviews"
)]
pub async fn list_reviews(
    State(service): State<Arc<ReviewService>>,
    Path(title_id): Path<Uuid>,
    Query(query): Query<ListReviewsQuery>,
) -> Result<Json<ApiResponse<Vec<ReviewResponseDto>>>> {
    let pagination = PaginationQuery {
        page: query.page,
        page_size: query.page_size,
    };
    let (reviews, total) = service
        .list(title_id, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(reviews),
        None,
        Some(Meta { total }),
    )))
}

/// Get a single review (public)
#[utoipa::path(
    get,
    path = "/v1/titles/{title_id}/reviews/{review_id}/",
    params(
        ("title_id" = Uuid, Path, description = "Title ID"),
        ("review_id" = Uuid, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review details", body = ApiResponse<ReviewResponseDto>),
        (status = 404, description = "Title or review not found")
    ),
    tag = "reviews"
)]
pub async fn get_review(
    State(service): State<Arc<ReviewService>>,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<ReviewResponseDto>>> {
    let review = service.get(title_id, review_id).await?;
    Ok(Json(ApiResponse::success(Some(review), None, None)))
}

/// Post a review for a title (authenticated; one per user per title)
#[utoipa::path(
    post,
    path = "/v1/titles/{title_id}/reviews/",
    params(("title_id" = Uuid, Path, description = "Title ID")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<ReviewResponseDto>),
        (status = 400, description = "Validation error or duplicate review"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Title not found")
    ),
    tag = "reviews",
    security(("bearer_auth" = []))
)]
pub async fn create_review(
    current_user: CurrentUser,
    State(service): State<Arc<ReviewService>>,
    Path(title_id): Path<Uuid>,
    AppJson(dto): AppJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReviewResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let review = service.create(title_id, &current_user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(review), None, None)),
    ))
}

/// Partially update a review (author, moderator or admin)
#[utoipa::path(
    patch,
    path = "/v1/titles/{title_id}/reviews/{review_id}/",
    params(
        ("title_id" = Uuid, Path, description = "Title ID"),
        ("review_id" = Uuid, Path, description = "Review ID")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<ReviewResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not the author, moderator or admin"),
        (status = 404, description = "Title or review not found")
    ),
    tag = "reviews",
    security(("bearer_auth" = []))
)]
pub async fn update_review(
    current_user: CurrentUser,
    State(service): State<Arc<ReviewService>>,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
    AppJson(dto): AppJson<UpdateReviewDto>,
) -> Result<Json<ApiResponse<ReviewResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let review = service
        .update(title_id, review_id, &current_user, dto)
        .await?;
    Ok(Json(ApiResponse::success(Some(review), None, None)))
}

/// Delete a review (author, moderator or admin)
#[utoipa::path(
    delete,
    path = "/v1/titles/{title_id}/reviews/{review_id}/",
    params(
        ("title_id" = Uuid, Path, description = "Title ID"),
        ("review_id" = Uuid, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not the author, moderator or admin"),
        (status = 404, description = "Title or review not found")
    ),
    tag = "reviews",
    security(("bearer_auth" = []))
)]
pub async fn delete_review(
    current_user: CurrentUser,
    State(service): State<Arc<ReviewService>>,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode> {
    service.delete(title_id, review_id, &current_user).await?;
    Ok(StatusCode::NO_CONTENT)
}
