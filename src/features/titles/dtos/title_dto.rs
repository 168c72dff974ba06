use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::genres::dtos::GenreResponseDto;
use crate::features::titles::models::TitleRow;
use crate::shared::constants::{NAME_MAX_LEN, SLUG_MAX_LEN};

/// Response DTO for a title, with its category, genres and aggregate rating
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TitleResponseDto {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    /// Average review score, truncated toward zero. Null until the first
    /// review lands.
    pub rating: Option<i32>,
    pub description: Option<String>,
    pub genre: Vec<GenreResponseDto>,
    pub category: Option<CategoryResponseDto>,
}

impl TitleResponseDto {
    pub fn from_row(row: TitleRow, genres: Vec<GenreResponseDto>) -> Self {
        let category = match (row.category_name, row.category_slug) {
            (Some(name), Some(slug)) => Some(CategoryResponseDto { name, slug }),
            _ => None,
        };
        Self {
            id: row.id,
            name: row.name,
            year: row.year,
            rating: truncate_rating(row.rating),
            description: row.description,
            genre: genres,
            category,
        }
    }
}

/// Average score rendered as an integer, fraction dropped
pub fn truncate_rating(avg: Option<f64>) -> Option<i32> {
    avg.map(|v| v as i32)
}

/// Request DTO for creating a title
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTitleDto {
    #[validate(length(min = 1, max = NAME_MAX_LEN, message = "Name must be 1-256 characters"))]
    pub name: String,

    pub year: i32,

    pub description: Option<String>,

    /// Genre slugs to attach
    #[serde(default)]
    pub genre: Vec<String>,

    /// Category slug
    #[validate(length(min = 1, max = SLUG_MAX_LEN, message = "Category slug must be 1-50 characters"))]
    pub category: String,
}

/// Request DTO for partially updating a title
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTitleDto {
    #[validate(length(min = 1, max = NAME_MAX_LEN, message = "Name must be 1-256 characters"))]
    pub name: Option<String>,

    pub year: Option<i32>,

    pub description: Option<String>,

    /// Replaces the full genre set when present
    pub genre: Option<Vec<String>>,

    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_truncated_toward_zero() {
        assert_eq!(truncate_rating(Some(9.0)), Some(9));
        assert_eq!(truncate_rating(Some(3.7)), Some(3));
        assert_eq!(truncate_rating(Some(8.999)), Some(8));
    }

    #[test]
    fn rating_is_null_without_reviews() {
        assert_eq!(truncate_rating(None), None);
    }

    #[test]
    fn create_title_rejects_empty_name() {
        let dto = CreateTitleDto {
            name: String::new(),
            year: 1994,
            description: None,
            genre: vec![],
            category: "films".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn genre_list_defaults_to_empty() {
        let dto: CreateTitleDto =
            serde_json::from_str(r#"{"name":"Dune","year":1965,"category":"books"}"#).unwrap();
        assert!(dto.genre.is_empty());
        assert!(dto.validate().is_ok());
    }
}
