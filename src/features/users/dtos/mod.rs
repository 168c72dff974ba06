mod user_dto;

pub use user_dto::{CreateUserDto, UpdateProfileDto, UpdateUserDto, UserResponseDto};
