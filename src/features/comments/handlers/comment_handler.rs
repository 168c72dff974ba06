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
use crate::features::comments::dtos::{CommentResponseDto, CreateCommentDto, UpdateCommentDto};
use crate::features::comments::services::CommentService;
use crate::shared::types::{default_page, default_page_size, ApiResponse, Meta, PaginationQuery};

/// Query params for listing comments
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCommentsQuery {
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

/// List comments on a review (public)
#[utoipa::path(
    get,
    path = "/v1/titles/{title_id}/reviews/{review_id}/comments/",
    params(
        ("title_id" = Uuid, Path, description = "Title ID"),
        ("review_id" = Uuid, Path, description = "Review ID"),
        ListCommentsQuery
    ),
    responses(
        (status = 200, description = "List of comments", body = ApiResponse<Vec<CommentResponseDto>>),
        (status = 404, description = "Title or review not found")
    ),
    tag = "comments"
)]
pub async fn list_comments(
    State(service): State<Arc<CommentService>>,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<ListCommentsQuery>,
) -> Result<Json<ApiResponse<Vec<CommentResponseDto>>>> {
    let pagination = PaginationQuery {
        page: query.page,
        page_size: query.page_size,
    };
    let (comments, total) = service
        .list(title_id, review_id, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(comments),
        None,
        Some(Meta { total }),
    )))
}

/// Get a single comment (public)
#[utoipa::path(
    get,
    path = "/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}/",
    params(
        ("title_id" = Uuid, Path, description = "Title ID"),
        ("review_id" = Uuid, Path, description = "Review ID"),
        ("comment_id" = Uuid, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment details", body = ApiResponse<CommentResponseDto>),
        (status = 404, description = "Title, review or comment not found")
    ),
    tag = "comments"
)]
pub async fn get_comment(
    State(service): State<Arc<CommentService>>,
    Path((title_id, review_id, comment_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<ApiResponse<CommentResponseDto>>> {
    let comment = service.get(title_id, review_id, comment_id).await?;
    Ok(Json(ApiResponse::success(Some(comment), None, None)))
}

/// Post a comment on a review (authenticated)
#[utoipa::path(
    post,
    path = "/v1/titles/{title_id}/reviews/{review_id}/comments/",
    params(
        ("title_id" = Uuid, Path, description = "Title ID"),
        ("review_id" = Uuid, Path, description = "Review ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = ApiResponse<CommentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Title or review not found")
    ),
    tag = "comments",
    security(("bearer_auth" = []))
)]
pub async fn create_comment(
    current_user: CurrentUser,
    State(service): State<Arc<CommentService>>,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
    AppJson(dto): AppJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<ApiResponse<CommentResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let comment = service
        .create(title_id, review_id, &current_user, dto)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(comment), None, None)),
    ))
}

/// Partially update a comment (author, moderator or admin)
#[utoipa::path(
    patch,
    path = "/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}/",
    params(
        ("title_id" = Uuid, Path, description = "Title ID"),
        ("review_id" = Uuid, Path, description = "Review ID"),
        ("comment_id" = Uuid, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = ApiResponse<CommentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not the author, moderator or admin"),
        (status = 404, description = "Title, review or comment not found")
    ),
    tag = "comments",
    security(("bearer_auth" = []))
)]
pub async fn update_comment(
    current_user: CurrentUser,
    State(service): State<Arc<CommentService>>,
    Path((title_id, review_id, comment_id)): Path<(Uuid, Uuid, Uuid)>,
    AppJson(dto): AppJson<UpdateCommentDto>,
) -> Result<Json<ApiResponse<CommentResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let comment = service
        .update(title_id, review_id, comment_id, &current_user, dto)
        .await?;
    Ok(Json(ApiResponse::success(Some(comment), None, None)))
}

/// Delete a comment (author, moderator or admin)
#[utoipa::path(
    delete,
    path = "/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}/",
    params(
        ("title_id" = Uuid, Path, description = "Title ID"),
        ("review_id" = Uuid, Path, description = "Review ID"),
        ("comment_id" = Uuid, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not the author, moderator or admin"),
        (status = 404, description = "Title, review or comment not found")
    ),
    tag = "comments",
    security(("bearer_auth" = []))
)]
pub async fn delete_comment(
    current_user: CurrentUser,
    State(service): State<Arc<CommentService>>,
    Path((title_id, review_id, comment_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<StatusCode> {
    service
        .delete(title_id, review_id, comment_id, &current_user)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
