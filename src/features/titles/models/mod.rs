mod title;

pub use title::{TitleGenreRow, TitleRow};
