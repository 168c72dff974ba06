use sqlx::PgPool;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::genres::dtos::{CreateGenreDto, GenreResponseDto};
use crate::features::genres::models::Genre;

/// Service for genre operations
pub struct GenreService {
    pool: PgPool,
}

impl GenreService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<GenreResponseDto>, i64)> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name, slug, created_at
            FROM genres
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
            ORDER BY name
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list genres: {:?}", e);
            AppError::Database(e)
        })?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM genres WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')",
        )
        .bind(search)
        .fetch_one(&self.pool)
        .await?;

        Ok((genres.into_iter().map(|g| g.into()).collect(), total))
    }

    pub async fn create(&self, dto: CreateGenreDto) -> Result<GenreResponseDto> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Validation("A genre with this name or slug already exists".to_string())
            } else {
                tracing::error!("Failed to create genre: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!("Genre created: slug={}", genre.slug);
        Ok(genre.into())
    }

    /// Delete by slug; junction rows to titles go with it (CASCADE)
    pub async fn delete_by_slug(&self, slug: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM genres WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Genre '{}' not found", slug)));
        }

        tracing::info!("Genre deleted: slug={}", slug);
        Ok(())
    }
}
