use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::constants::{NAME_MAX_LEN, SLUG_MAX_LEN};
use crate::shared::validation::validate_slug;

/// Response DTO for a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            name: c.name,
            slug: c.slug,
        }
    }
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = NAME_MAX_LEN, message = "Name must be 1-256 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = SLUG_MAX_LEN, message = "Slug must be 1-50 characters"))]
    #[validate(custom(function = validate_slug))]
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_validated() {
        let dto = CreateCategoryDto {
            name: "Films".to_string(),
            slug: "not a slug".to_string(),
        };
        assert!(dto.validate().is_err());

        let dto = CreateCategoryDto {
            name: "Films".to_string(),
            slug: "films".to_string(),
        };
        assert!(dto.validate().is_ok());
    }
}
