use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Flat row produced by the list/detail queries: the title joined with its
/// category and the review score average.
#[derive(Debug, Clone, FromRow)]
pub struct TitleRow {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Genre attached to a title, keyed for batch loading
#[derive(Debug, Clone, FromRow)]
pub struct TitleGenreRow {
    pub title_id: Uuid,
    pub name: String,
    pub slug: String,
}
