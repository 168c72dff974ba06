use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::models::{User, UserRole};

/// Service for user account management
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List users ordered by username, optionally filtered by a username
    /// substring. Returns the page plus the unfiltered-by-page total.
    pub async fn list(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<UserResponseDto>, i64)> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, first_name, last_name, bio, role, is_superuser,
                   created_at, updated_at
            FROM users
            WHERE ($1::text IS NULL OR username ILIKE '%' || $1 || '%')
            ORDER BY username
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::Database(e)
        })?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE ($1::text IS NULL OR username ILIKE '%' || $1 || '%')",
        )
        .bind(search)
        .fetch_one(&self.pool)
        .await?;

        Ok((users.into_iter().map(|u| u.into()).collect(), total))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, first_name, last_name, bio, role, is_superuser,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }

    pub async fn get_by_username(&self, username: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, first_name, last_name, bio, role, is_superuser,
                   created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))
    }

    /// Create a user account (admin endpoint)
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, first_name, last_name, bio, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, first_name, last_name, bio, role, is_superuser,
                      created_at, updated_at
            "#,
        )
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(dto.first_name.as_deref().unwrap_or(""))
        .bind(dto.last_name.as_deref().unwrap_or(""))
        .bind(dto.bio.as_deref().unwrap_or(""))
        .bind(dto.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Validation(
                    "A user with this username or email already exists".to_string(),
                )
            } else {
                tracing::error!("Failed to create user: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!("User created: username={}, role={}", user.username, user.role.as_str());
        Ok(user.into())
    }

    /// Fetch the user for the exact (username, email) pair, creating it when
    /// absent. Sign-up is idempotent for a matching pair; a username or email
    /// already attached to a different identity is a validation error.
    pub async fn get_or_create_for_signup(&self, username: &str, email: &str) -> Result<User> {
        if let Some(user) = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, first_name, last_name, bio, role, is_superuser,
                   created_at, updated_at
            FROM users
            WHERE username = $1 AND email = $2
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        {
            return Ok(user);
        }

        let username_taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;
        if username_taken {
            return Err(AppError::Validation(
                "A user with this username already exists".to_string(),
            ));
        }

        let email_taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        if email_taken {
            return Err(AppError::Validation(
                "A user with this email already exists".to_string(),
            ));
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, first_name, last_name, bio, role, is_superuser,
                      created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(UserRole::User)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Lost a race with a concurrent sign-up for the same identity
            if is_unique_violation(&e) {
                AppError::Validation(
                    "A user with this username or email already exists".to_string(),
                )
            } else {
                AppError::Database(e)
            }
        })?;

        tracing::info!("User signed up: username={}", user.username);
        Ok(user)
    }

    /// Partial update; `None` fields keep their current value
    pub async fn update_by_username(
        &self,
        username: &str,
        dto: UpdateUserDto,
    ) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                bio = COALESCE($5, bio),
                role = COALESCE($6, role),
                updated_at = NOW()
            WHERE username = $1
            RETURNING id, username, email, first_name, last_name, bio, role, is_superuser,
                      created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(dto.email.as_deref())
        .bind(dto.first_name.as_deref())
        .bind(dto.last_name.as_deref())
        .bind(dto.bio.as_deref())
        .bind(dto.role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Validation("A user with this email already exists".to_string())
            } else {
                tracing::error!("Failed to update user: {:?}", e);
                AppError::Database(e)
            }
        })?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))
    }

    pub async fn delete_by_username(&self, username: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User '{}' not found", username)));
        }

        tracing::info!("User deleted: username={}", username);
        Ok(())
    }
}
