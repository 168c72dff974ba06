mod auth_dto;

pub use auth_dto::{GetTokenRequestDto, SignUpRequestDto, SignUpResponseDto, TokenResponseDto};
