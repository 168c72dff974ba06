mod review_dto;

pub use review_dto::{CreateReviewDto, ReviewResponseDto, UpdateReviewDto};
