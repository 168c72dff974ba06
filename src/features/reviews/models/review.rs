use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Review joined with its author's username for rendering
#[derive(Debug, Clone, FromRow)]
pub struct ReviewRow {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub text: String,
    pub score: i32,
    pub pub_date: DateTime<Utc>,
}
