mod genre_dto;

pub use genre_dto::{CreateGenreDto, GenreResponseDto};
