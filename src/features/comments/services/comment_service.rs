use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::CurrentUser;
use crate::features::auth::policy;
use crate::features::comments::dtos::{CommentResponseDto, CreateCommentDto, UpdateCommentDto};
use crate::features::comments::models::CommentRow;

/// Service for comment operations
///
/// Comments hang off a review, which in turn hangs off a title. A review id
/// reached through the wrong title path is treated as missing.
pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CommentResponseDto>, i64)> {
        self.ensure_review_exists(title_id, review_id).await?;

        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.author_id, u.username AS author_username,
                   c.text, c.pub_date
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.review_id = $1
            ORDER BY c.pub_date DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(review_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list comments: {:?}", e);
            AppError::Database(e)
        })?;

        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE review_id = $1")
                .bind(review_id)
                .fetch_one(&self.pool)
                .await?;

        Ok((rows.into_iter().map(|c| c.into()).collect(), total))
    }

    pub async fn get(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<CommentResponseDto> {
        self.ensure_review_exists(title_id, review_id).await?;
        let row = self.fetch(review_id, comment_id).await?;
        Ok(row.into())
    }

    pub async fn create(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        actor: &CurrentUser,
        dto: CreateCommentDto,
    ) -> Result<CommentResponseDto> {
        self.ensure_review_exists(title_id, review_id).await?;

        let comment = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (review_id, author_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, author_id, $4::varchar AS author_username, text, pub_date
            "#,
        )
        .bind(review_id)
        .bind(actor.id)
        .bind(&dto.text)
        .bind(&actor.username)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Comment created: id={} review={} author={}",
            comment.id,
            review_id,
            actor.username
        );
        Ok(comment.into())
    }

    pub async fn update(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
        actor: &CurrentUser,
        dto: UpdateCommentDto,
    ) -> Result<CommentResponseDto> {
        self.ensure_review_exists(title_id, review_id).await?;
        let existing = self.fetch(review_id, comment_id).await?;
        policy::ensure_can_mutate(actor, existing.author_id)?;

        let comment = sqlx::query_as::<_, CommentRow>(
            r#"
            UPDATE comments c
            SET text = COALESCE($3, text)
            FROM users u
            WHERE c.id = $1 AND c.review_id = $2 AND u.id = c.author_id
            RETURNING c.id, c.author_id, u.username AS author_username,
                      c.text, c.pub_date
            "#,
        )
        .bind(comment_id)
        .bind(review_id)
        .bind(dto.text.as_deref())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Comment updated: id={}", comment_id);
        Ok(comment.into())
    }

    pub async fn delete(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
        actor: &CurrentUser,
    ) -> Result<()> {
        self.ensure_review_exists(title_id, review_id).await?;
        let existing = self.fetch(review_id, comment_id).await?;
        policy::ensure_can_mutate(actor, existing.author_id)?;

        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("Comment deleted: id={}", comment_id);
        Ok(())
    }

    async fn fetch(&self, review_id: Uuid, comment_id: Uuid) -> Result<CommentRow> {
        sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.author_id, u.username AS author_username,
                   c.text, c.pub_date
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.id = $1 AND c.review_id = $2
            "#,
        )
        .bind(comment_id)
        .bind(review_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", comment_id)))
    }

    /// The review must exist and belong to the title named in the path
    async fn ensure_review_exists(&self, title_id: Uuid, review_id: Uuid) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM reviews WHERE id = $1 AND title_id = $2)",
        )
        .bind(review_id)
        .bind(title_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Review {} not found",
                review_id
            )));
        }
        Ok(())
    }
}
