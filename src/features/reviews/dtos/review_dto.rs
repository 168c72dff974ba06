use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reviews::models::ReviewRow;
use crate::shared::constants::{SCORE_MAX, SCORE_MIN};

/// Response DTO for a review
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponseDto {
    pub id: Uuid,
    pub text: String,
    /// Author's username
    pub author: String,
    pub score: i32,
    pub pub_date: DateTime<Utc>,
}

impl From<ReviewRow> for ReviewResponseDto {
    fn from(r: ReviewRow) -> Self {
        Self {
            id: r.id,
            text: r.text,
            author: r.author_username,
            score: r.score,
            pub_date: r.pub_date,
        }
    }
}

/// Request DTO for creating a review
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReviewDto {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    #[validate(range(min = SCORE_MIN, max = SCORE_MAX, message = "Score must be between 0 and 10"))]
    pub score: i32,
}

/// Request DTO for partially updating a review
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReviewDto {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: Option<String>,

    #[validate(range(min = SCORE_MIN, max = SCORE_MAX, message = "Score must be between 0 and 10"))]
    pub score: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bounds_are_inclusive() {
        for score in [0, 10] {
            let dto = CreateReviewDto {
                text: "fine".to_string(),
                score,
            };
            assert!(dto.validate().is_ok(), "score {} should pass", score);
        }
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        for score in [-1, 11] {
            let dto = CreateReviewDto {
                text: "fine".to_string(),
                score,
            };
            assert!(dto.validate().is_err(), "score {} should fail", score);
        }
    }

    #[test]
    fn empty_text_is_rejected() {
        let dto = CreateReviewDto {
            text: String::new(),
            score: 5,
        };
        assert!(dto.validate().is_err());
    }
}
