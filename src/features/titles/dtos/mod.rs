mod title_dto;

pub use title_dto::{truncate_rating, CreateTitleDto, TitleResponseDto, UpdateTitleDto};
