use std::collections::HashMap;

use chrono::{Datelike, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::genres::dtos::GenreResponseDto;
use crate::features::titles::dtos::{CreateTitleDto, TitleResponseDto, UpdateTitleDto};
use crate::features::titles::models::{TitleGenreRow, TitleRow};

const TITLE_SELECT: &str = r#"
    SELECT t.id, t.name, t.year, t.description, t.created_at,
           c.name AS category_name, c.slug AS category_slug,
           (SELECT AVG(r.score)::float8 FROM reviews r WHERE r.title_id = t.id) AS rating
    FROM titles t
    LEFT JOIN categories c ON c.id = t.category_id
"#;

/// Filters accepted by the title list endpoint
#[derive(Debug, Default)]
pub struct TitleFilter {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub genre: Option<String>,
}

/// Service for title operations
pub struct TitleService {
    pool: PgPool,
}

impl TitleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        filter: &TitleFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<TitleResponseDto>, i64)> {
        let query = format!(
            r#"{TITLE_SELECT}
            WHERE ($1::text IS NULL OR t.name ILIKE '%' || $1 || '%')
              AND ($2::int IS NULL OR t.year = $2)
              AND ($3::text IS NULL OR c.slug = $3)
              AND ($4::text IS NULL OR EXISTS (
                    SELECT 1 FROM title_genres tg
                    JOIN genres g ON g.id = tg.genre_id
                    WHERE tg.title_id = t.id AND g.slug = $4))
            ORDER BY t.name
            LIMIT $5 OFFSET $6
            "#
        );

        let rows = sqlx::query_as::<_, TitleRow>(&query)
            .bind(filter.name.as_deref())
            .bind(filter.year)
            .bind(filter.category.as_deref())
            .bind(filter.genre.as_deref())
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list titles: {:?}", e);
                AppError::Database(e)
            })?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM titles t
            LEFT JOIN categories c ON c.id = t.category_id
            WHERE ($1::text IS NULL OR t.name ILIKE '%' || $1 || '%')
              AND ($2::int IS NULL OR t.year = $2)
              AND ($3::text IS NULL OR c.slug = $3)
              AND ($4::text IS NULL OR EXISTS (
                    SELECT 1 FROM title_genres tg
                    JOIN genres g ON g.id = tg.genre_id
                    WHERE tg.title_id = t.id AND g.slug = $4))
            "#,
        )
        .bind(filter.name.as_deref())
        .bind(filter.year)
        .bind(filter.category.as_deref())
        .bind(filter.genre.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let title_ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut genres_by_title = self.load_genres(&title_ids).await?;

        let titles = rows
            .into_iter()
            .map(|row| {
                let genres = genres_by_title.remove(&row.id).unwrap_or_default();
                TitleResponseDto::from_row(row, genres)
            })
            .collect();

        Ok((titles, total))
    }

    pub async fn get(&self, id: Uuid) -> Result<TitleResponseDto> {
        let query = format!("{TITLE_SELECT} WHERE t.id = $1");
        let row = sqlx::query_as::<_, TitleRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Title {} not found", id)))?;

        let mut genres_by_title = self.load_genres(&[id]).await?;
        let genres = genres_by_title.remove(&id).unwrap_or_default();
        Ok(TitleResponseDto::from_row(row, genres))
    }

    pub async fn create(&self, dto: CreateTitleDto) -> Result<TitleResponseDto> {
        validate_year(dto.year)?;
        let category_id = self.resolve_category(&dto.category).await?;
        let genre_ids = self.resolve_genres(&dto.genre).await?;

        let mut tx = self.pool.begin().await?;

        let title_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO titles (name, year, description, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&dto.name)
        .bind(dto.year)
        .bind(dto.description.as_deref())
        .bind(category_id)
        .fetch_one(&mut *tx)
        .await?;

        if !genre_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO title_genres (title_id, genre_id)
                SELECT $1, g FROM UNNEST($2::uuid[]) AS g
                "#,
            )
            .bind(title_id)
            .bind(&genre_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::info!("Title created: id={}", title_id);

        self.get(title_id).await
    }

    pub async fn update(&self, id: Uuid, dto: UpdateTitleDto) -> Result<TitleResponseDto> {
        if let Some(year) = dto.year {
            validate_year(year)?;
        }
        let category_id = match &dto.category {
            Some(slug) => Some(self.resolve_category(slug).await?),
            None => None,
        };
        let genre_ids = match &dto.genre {
            Some(slugs) => Some(self.resolve_genres(slugs).await?),
            None => None,
        };

        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE titles
            SET name = COALESCE($2, name),
                year = COALESCE($3, year),
                description = COALESCE($4, description),
                category_id = COALESCE($5, category_id)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(dto.name.as_deref())
        .bind(dto.year)
        .bind(dto.description.as_deref())
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Title {} not found", id)));
        }

        if let Some(ids) = genre_ids {
            sqlx::query("DELETE FROM title_genres WHERE title_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            if !ids.is_empty() {
                sqlx::query(
                    r#"
                    INSERT INTO title_genres (title_id, genre_id)
                    SELECT $1, g FROM UNNEST($2::uuid[]) AS g
                    "#,
                )
                .bind(id)
                .bind(&ids)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        tracing::info!("Title updated: id={}", id);

        self.get(id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM titles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Title {} not found", id)));
        }

        tracing::info!("Title deleted: id={}", id);
        Ok(())
    }

    async fn load_genres(
        &self,
        title_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<GenreResponseDto>>> {
        if title_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, TitleGenreRow>(
            r#"
            SELECT tg.title_id, g.name, g.slug
            FROM title_genres tg
            JOIN genres g ON g.id = tg.genre_id
            WHERE tg.title_id = ANY($1)
            ORDER BY g.name
            "#,
        )
        .bind(title_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut map: HashMap<Uuid, Vec<GenreResponseDto>> = HashMap::new();
        for row in rows {
            map.entry(row.title_id).or_default().push(GenreResponseDto {
                name: row.name,
                slug: row.slug,
            });
        }
        Ok(map)
    }

    async fn resolve_category(&self, slug: &str) -> Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM categories WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::Validation(format!("Unknown category slug '{}'", slug)))
    }

    async fn resolve_genres(&self, slugs: &[String]) -> Result<Vec<Uuid>> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let found = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT id, slug FROM genres WHERE slug = ANY($1)",
        )
        .bind(slugs)
        .fetch_all(&self.pool)
        .await?;

        if found.len() != slugs.len() {
            let known: Vec<&str> = found.iter().map(|(_, s)| s.as_str()).collect();
            let missing: Vec<&str> = slugs
                .iter()
                .map(|s| s.as_str())
                .filter(|s| !known.contains(s))
                .collect();
            return Err(AppError::Validation(format!(
                "Unknown genre slug(s): {}",
                missing.join(", ")
            )));
        }

        Ok(found.into_iter().map(|(id, _)| id).collect())
    }
}

/// Titles from the future are not accepted
fn validate_year(year: i32) -> Result<()> {
    let current = Utc::now().year();
    if year > current {
        return Err(AppError::Validation(format!(
            "Year {} is in the future",
            year
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_year_is_accepted() {
        assert!(validate_year(Utc::now().year()).is_ok());
    }

    #[test]
    fn future_year_is_rejected() {
        assert!(validate_year(Utc::now().year() + 1).is_err());
    }

    #[test]
    fn ancient_year_is_accepted() {
        assert!(validate_year(-800).is_ok());
    }
}
