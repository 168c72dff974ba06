use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::auth::model::CurrentUser;
use crate::features::auth::policy;
use crate::features::reviews::dtos::{CreateReviewDto, ReviewResponseDto, UpdateReviewDto};
use crate::features::reviews::models::ReviewRow;

/// Service for review operations
///
/// Every method takes the parent title id: reviews are only addressable
/// through their title, and a review id under the wrong title is a 404.
pub struct ReviewService {
    pool: PgPool,
}

impl ReviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        title_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ReviewResponseDto>, i64)> {
        self.ensure_title_exists(title_id).await?;

        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT r.id, r.author_id, u.username AS author_username,
                   r.text, r.score, r.pub_date
            FROM reviews r
            JOIN users u ON u.id = r.author_id
            WHERE r.title_id = $1
            ORDER BY r.pub_date DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(title_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reviews: {:?}", e);
            AppError::Database(e)
        })?;

        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews WHERE title_id = $1")
                .bind(title_id)
                .fetch_one(&self.pool)
                .await?;

        Ok((rows.into_iter().map(|r| r.into()).collect(), total))
    }

    pub async fn get(&self, title_id: Uuid, review_id: Uuid) -> Result<ReviewResponseDto> {
        self.ensure_title_exists(title_id).await?;
        let row = self.fetch(title_id, review_id).await?;
        Ok(row.into())
    }

    pub async fn create(
        &self,
        title_id: Uuid,
        actor: &CurrentUser,
        dto: CreateReviewDto,
    ) -> Result<ReviewResponseDto> {
        self.ensure_title_exists(title_id).await?;

        let already_reviewed = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM reviews WHERE author_id = $1 AND title_id = $2)",
        )
        .bind(actor.id)
        .bind(title_id)
        .fetch_one(&self.pool)
        .await?;

        if already_reviewed {
            return Err(AppError::Validation(
                "You have already reviewed this title".to_string(),
            ));
        }

        let review = sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews (title_id, author_id, text, score)
            VALUES ($1, $2, $3, $4)
            RETURNING id, author_id, $5::varchar AS author_username, text, score, pub_date
            "#,
        )
        .bind(title_id)
        .bind(actor.id)
        .bind(&dto.text)
        .bind(dto.score)
        .bind(&actor.username)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Concurrent double-submit slips past the pre-check
            if is_unique_violation(&e) {
                AppError::Validation("You have already reviewed this title".to_string())
            } else {
                tracing::error!("Failed to create review: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!(
            "Review created: id={} title={} author={}",
            review.id,
            title_id,
            actor.username
        );
        Ok(review.into())
    }

    pub async fn update(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        actor: &CurrentUser,
        dto: UpdateReviewDto,
    ) -> Result<ReviewResponseDto> {
        self.ensure_title_exists(title_id).await?;
        let existing = self.fetch(title_id, review_id).await?;
        policy::ensure_can_mutate(actor, existing.author_id)?;

        let review = sqlx::query_as::<_, ReviewRow>(
            r#"
            UPDATE reviews r
            SET text = COALESCE($3, text),
                score = COALESCE($4, score)
            FROM users u
            WHERE r.id = $1 AND r.title_id = $2 AND u.id = r.author_id
            RETURNING r.id, r.author_id, u.username AS author_username,
                      r.text, r.score, r.pub_date
            "#,
        )
        .bind(review_id)
        .bind(title_id)
        .bind(dto.text.as_deref())
        .bind(dto.score)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Review updated: id={}", review_id);
        Ok(review.into())
    }

    pub async fn delete(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        actor: &CurrentUser,
    ) -> Result<()> {
        self.ensure_title_exists(title_id).await?;
        let existing = self.fetch(title_id, review_id).await?;
        policy::ensure_can_mutate(actor, existing.author_id)?;

        sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(review_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("Review deleted: id={}", review_id);
        Ok(())
    }

    async fn fetch(&self, title_id: Uuid, review_id: Uuid) -> Result<ReviewRow> {
        sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT r.id, r.author_id, u.username AS author_username,
                   r.text, r.score, r.pub_date
            FROM reviews r
            JOIN users u ON u.id = r.author_id
            WHERE r.id = $1 AND r.title_id = $2
            "#,
        )
        .bind(review_id)
        .bind(title_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review {} not found", review_id)))
    }

    async fn ensure_title_exists(&self, title_id: Uuid) -> Result<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM titles WHERE id = $1)")
                .bind(title_id)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(AppError::NotFound(format!("Title {} not found", title_id)));
        }
        Ok(())
    }
}
