mod title_service;

pub use title_service::{TitleFilter, TitleService};
