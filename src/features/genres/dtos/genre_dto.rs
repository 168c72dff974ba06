use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::genres::models::Genre;
use crate::shared::constants::{NAME_MAX_LEN, SLUG_MAX_LEN};
use crate::shared::validation::validate_slug;

/// Response DTO for a genre
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenreResponseDto {
    pub name: String,
    pub slug: String,
}

impl From<Genre> for GenreResponseDto {
    fn from(g: Genre) -> Self {
        Self {
            name: g.name,
            slug: g.slug,
        }
    }
}

/// Request DTO for creating a genre
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGenreDto {
    #[validate(length(min = 1, max = NAME_MAX_LEN, message = "Name must be 1-256 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = SLUG_MAX_LEN, message = "Slug must be 1-50 characters"))]
    #[validate(custom(function = validate_slug))]
    pub slug: String,
}
