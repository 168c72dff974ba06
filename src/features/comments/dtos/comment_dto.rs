use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::comments::models::CommentRow;
use crate::shared::constants::COMMENT_TEXT_MAX_LEN;

/// Response DTO for a comment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponseDto {
    pub id: Uuid,
    pub text: String,
    /// Author's username
    pub author: String,
    pub pub_date: DateTime<Utc>,
}

impl From<CommentRow> for CommentResponseDto {
    fn from(c: CommentRow) -> Self {
        Self {
            id: c.id,
            text: c.text,
            author: c.author_username,
            pub_date: c.pub_date,
        }
    }
}

/// Request DTO for creating a comment
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentDto {
    #[validate(length(min = 1, max = COMMENT_TEXT_MAX_LEN, message = "Text must be 1-200 characters"))]
    pub text: String,
}

/// Request DTO for partially updating a comment
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentDto {
    #[validate(length(min = 1, max = COMMENT_TEXT_MAX_LEN, message = "Text must be 1-200 characters"))]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_at_limit_passes() {
        let dto = CreateCommentDto {
            text: "x".repeat(200),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn overlong_text_is_rejected() {
        let dto = CreateCommentDto {
            text: "x".repeat(201),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn empty_text_is_rejected() {
        let dto = CreateCommentDto {
            text: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}
